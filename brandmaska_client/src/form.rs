use std::collections::BTreeMap;

use brandmaska_models::contact::rules::{is_long_enough, is_valid_email, is_valid_phone, sanitize};
use serde::Serialize;

/// An input of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Name,
    Email,
    Phone,
    Message,
    /// Hidden from humans; anything typed here marks the submission as spam.
    Honeypot,
}

impl FormField {
    pub const ALL: [Self; 5] = [
        Self::Name,
        Self::Email,
        Self::Phone,
        Self::Message,
        Self::Honeypot,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Message => "message",
            Self::Honeypot => "honeypot",
        }
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The raw form contents as typed by the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub honeypot: String,
}

impl SubmissionDraft {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::Message => &self.message,
            FormField::Honeypot => &self.honeypot,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Phone => &mut self.phone,
            FormField::Message => &mut self.message,
            FormField::Honeypot => &mut self.honeypot,
        };
        *slot = value;
    }

    pub fn is_empty(&self) -> bool {
        FormField::ALL.iter().all(|&field| self.get(field).is_empty())
    }
}

/// Error messages of the fields that failed validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<FormField, &'static str>);

impl FieldErrors {
    pub fn get(&self, field: FormField) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn remove(&mut self, field: FormField) -> Option<&'static str> {
        self.0.remove(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &'static str)> + '_ {
        self.0.iter().map(|(&field, &message)| (field, message))
    }

    fn insert(&mut self, field: FormField, message: &'static str) {
        self.0.insert(field, message);
    }
}

pub const NAME_REQUIRED: &str = "Name is required.";
pub const EMAIL_REQUIRED: &str = "Email is required.";
pub const EMAIL_INVALID: &str = "Please enter a valid email address.";
pub const PHONE_INVALID: &str = "Please enter a valid phone number.";
pub const MESSAGE_REQUIRED: &str = "Message is required.";
pub const MESSAGE_TOO_SHORT: &str = "Message should be at least 10 characters.";
pub const HONEYPOT_FILLED: &str = "Spam detected.";

/// Body of the request sent to the contact endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub message: String,
}

/// Checks every field of the draft against the rules the server enforces.
///
/// Unlike the server, all failing fields are reported at once. Values are
/// checked in their sanitized form so that both sides agree on every input,
/// but the request carries them only trimmed.
pub fn validate_draft(draft: &SubmissionDraft) -> Result<ContactRequest, FieldErrors> {
    let mut errors = FieldErrors::default();

    let name = sanitize(&draft.name);
    if name.is_empty() {
        errors.insert(FormField::Name, NAME_REQUIRED);
    }

    let email = sanitize(&draft.email);
    if email.is_empty() {
        errors.insert(FormField::Email, EMAIL_REQUIRED);
    } else if !is_valid_email(&email) {
        errors.insert(FormField::Email, EMAIL_INVALID);
    }

    let phone = sanitize(&draft.phone);
    if !phone.is_empty() && !is_valid_phone(&phone) {
        errors.insert(FormField::Phone, PHONE_INVALID);
    }

    let message = sanitize(&draft.message);
    if message.is_empty() {
        errors.insert(FormField::Message, MESSAGE_REQUIRED);
    } else if !is_long_enough(&message) {
        errors.insert(FormField::Message, MESSAGE_TOO_SHORT);
    }

    if !draft.honeypot.is_empty() {
        errors.insert(FormField::Honeypot, HONEYPOT_FILLED);
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    let phone = draft.phone.trim();
    Ok(ContactRequest {
        name: draft.name.trim().into(),
        email: draft.email.trim().into(),
        phone: (!phone.is_empty()).then(|| phone.into()),
        message: draft.message.trim().into(),
    })
}
