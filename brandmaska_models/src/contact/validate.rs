use serde_json::Value;
use thiserror::Error;

use super::{
    rules::{self, sanitize},
    ContactEmail, ContactMessage, ContactName, ContactPayload, ContactPhone,
};

/// Reasons for rejecting a contact form submission.
///
/// The `Display` output of each variant is the message shown to the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactValidationError {
    #[error("Invalid JSON body.")]
    InvalidBody,
    #[error("Name, email, and message are required.")]
    MissingRequired,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please enter a valid phone number.")]
    InvalidPhone,
    #[error("Message should be at least 10 characters.")]
    MessageTooShort,
}

/// Validates and sanitizes an untrusted contact form body.
///
/// Checks run in a fixed order and the first failing check is reported.
pub fn validate_payload(body: &Value) -> Result<ContactPayload, ContactValidationError> {
    let Value::Object(body) = body else {
        return Err(ContactValidationError::InvalidBody);
    };

    let field = |key: &str| body.get(key).and_then(Value::as_str).map(sanitize);

    let name = field("name").unwrap_or_default();
    let email = field("email").unwrap_or_default();
    let phone = field("phone").filter(|phone| !phone.is_empty());
    let message = field("message").unwrap_or_default();

    if name.is_empty() || email.is_empty() || message.is_empty() {
        return Err(ContactValidationError::MissingRequired);
    }

    let email = ContactEmail::try_new(email).map_err(|_| ContactValidationError::InvalidEmail)?;

    let phone = phone
        .map(ContactPhone::try_new)
        .transpose()
        .map_err(|_| ContactValidationError::InvalidPhone)?;

    if !rules::is_long_enough(&message) {
        return Err(ContactValidationError::MessageTooShort);
    }
    let message =
        ContactMessage::try_new(message).map_err(|_| ContactValidationError::MessageTooShort)?;

    let name = ContactName::try_new(name).map_err(|_| ContactValidationError::MissingRequired)?;

    Ok(ContactPayload {
        name,
        email,
        phone,
        message,
    })
}
