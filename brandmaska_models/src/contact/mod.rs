use nutype::nutype;

use self::rules::{is_long_enough, sanitize, EMAIL_REGEX, PHONE_REGEX};
use crate::email_address::EmailAddress;

#[cfg(any(test, feature = "fixtures"))]
pub mod fixtures;
pub mod rules;
mod validate;

pub use validate::{validate_payload, ContactValidationError};

/// A contact form submission that passed every server-side check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactPayload {
    pub name: ContactName,
    pub email: ContactEmail,
    pub phone: Option<ContactPhone>,
    pub message: ContactMessage,
}

/// A validated payload together with the state of the hidden honeypot field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub payload: ContactPayload,
    /// Raw content of the honeypot field, `None` if it was absent, empty or
    /// not a string. Whitespace counts as content.
    pub honeypot: Option<String>,
}

impl ContactSubmission {
    pub const HONEYPOT_FIELD: &'static str = "honeypot";

    /// Validates an untrusted JSON body and picks up the optional honeypot
    /// field.
    pub fn from_json(body: &serde_json::Value) -> Result<Self, ContactValidationError> {
        let payload = validate_payload(body)?;
        let honeypot = body
            .get(Self::HONEYPOT_FIELD)
            .and_then(serde_json::Value::as_str)
            .filter(|honeypot| !honeypot.is_empty())
            .map(str::to_owned);

        Ok(Self { payload, honeypot })
    }

    pub fn is_spam(&self) -> bool {
        self.honeypot.is_some()
    }
}

#[nutype(
    sanitize(with = |s: String| sanitize(&s)),
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, AsRef, Deref, Display, TryFrom)
)]
pub struct ContactName(String);

#[nutype(
    sanitize(with = |s: String| sanitize(&s)),
    validate(regex = EMAIL_REGEX),
    derive(Debug, Clone, PartialEq, Eq, AsRef, Deref, Display, TryFrom)
)]
pub struct ContactEmail(String);

#[nutype(
    sanitize(with = |s: String| sanitize(&s)),
    validate(regex = PHONE_REGEX),
    derive(Debug, Clone, PartialEq, Eq, AsRef, Deref, Display, TryFrom)
)]
pub struct ContactPhone(String);

#[nutype(
    sanitize(with = |s: String| sanitize(&s)),
    validate(predicate = |message: &str| is_long_enough(message)),
    derive(Debug, Clone, PartialEq, Eq, AsRef, Deref, Display, TryFrom)
)]
pub struct ContactMessage(String);

impl ContactEmail {
    /// Parses the address into a mailbox address usable as a mail header.
    ///
    /// The shape check performed on construction is more permissive than
    /// RFC 5322, so this conversion can still fail.
    pub fn to_email_address(&self) -> Result<EmailAddress, lettre::address::AddressError> {
        self.as_ref().parse()
    }
}
