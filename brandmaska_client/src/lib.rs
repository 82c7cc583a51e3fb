//! Client side of the contact form: the draft the visitor edits, the
//! validation mirror that runs before anything is sent and the HTTP client
//! that talks to the contact endpoint.

pub mod api;
pub mod controller;
pub mod form;

pub use api::{ContactApiError, ContactApiService, ContactApiServiceImpl};
pub use controller::{Banner, ContactFormController, SubmitOutcome};
pub use form::{validate_draft, ContactRequest, FieldErrors, FormField, SubmissionDraft};
