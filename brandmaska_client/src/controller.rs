use tracing::warn;

use crate::{
    api::{ContactApiError, ContactApiService},
    form::{validate_draft, ContactRequest, FieldErrors, FormField, SubmissionDraft},
};

pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again later.";

/// Message shown above the form after a submit attempt reached the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    Success(String),
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Client side validation failed, nothing has been sent.
    Invalid,
    /// Another submission is still in flight.
    Busy,
    Sent,
    Failed,
}

/// Owns the state of the contact form and drives a submission through
/// validation and the contact endpoint.
#[derive(Debug)]
pub struct ContactFormController<Api> {
    api: Api,
    draft: SubmissionDraft,
    errors: FieldErrors,
    banner: Option<Banner>,
    busy: bool,
}

impl<Api: ContactApiService> ContactFormController<Api> {
    pub fn new(api: Api) -> Self {
        Self {
            api,
            draft: SubmissionDraft::default(),
            errors: FieldErrors::default(),
            banner: None,
            busy: false,
        }
    }

    pub fn draft(&self) -> &SubmissionDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    /// Whether a submission is in flight. The submit control is disabled
    /// while this is set.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Store a new value for `field` and drop its error without revalidating.
    pub fn update_field(&mut self, field: FormField, value: impl Into<String>) {
        self.draft.set(field, value.into());
        self.errors.remove(field);
    }

    /// Validate the draft and, on success, mark the controller as busy.
    ///
    /// Returns the request to send, or `Err` with the outcome if nothing
    /// should be sent.
    pub fn begin_submit(&mut self) -> Result<ContactRequest, SubmitOutcome> {
        if self.busy {
            return Err(SubmitOutcome::Busy);
        }

        match validate_draft(&self.draft) {
            Ok(request) => {
                self.errors = FieldErrors::default();
                self.banner = None;
                self.busy = true;
                Ok(request)
            }
            Err(errors) => {
                self.errors = errors;
                Err(SubmitOutcome::Invalid)
            }
        }
    }

    /// Apply the server's answer to a request returned by
    /// [`begin_submit`](Self::begin_submit).
    pub fn finish_submit(&mut self, result: Result<String, ContactApiError>) -> SubmitOutcome {
        self.busy = false;

        match result {
            Ok(message) => {
                self.draft = SubmissionDraft::default();
                self.banner = Some(Banner::Success(message));
                SubmitOutcome::Sent
            }
            Err(ContactApiError::Rejected { status, error }) => {
                let message = error.unwrap_or_else(|| {
                    warn!(status, "contact endpoint answered without an error message");
                    GENERIC_FAILURE.into()
                });
                self.banner = Some(Banner::Error(message));
                SubmitOutcome::Failed
            }
            Err(ContactApiError::Other(err)) => {
                warn!("Failed to submit contact form: {err:#}");
                self.banner = Some(Banner::Error(GENERIC_FAILURE.into()));
                SubmitOutcome::Failed
            }
        }
    }

    /// Run a complete submit attempt.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let request = match self.begin_submit() {
            Ok(request) => request,
            Err(outcome) => return outcome,
        };
        let result = self.api.send_mail(request).await;
        self.finish_submit(result)
    }
}
