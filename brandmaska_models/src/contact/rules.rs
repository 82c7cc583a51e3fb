//! Field rules shared by the server-side validator and the contact form
//! controller, so both sides accept and reject exactly the same inputs.

use std::sync::LazyLock;

use regex::Regex;

/// Minimum length of a message, in UTF-16 code units like a browser counts
/// it.
pub const MESSAGE_MIN_LEN: usize = 10;

/// `local-part@domain.tld`, without whitespace or additional `@` characters.
pub static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// An optional leading `+` followed by 7 to 20 digits, parentheses, hyphens
/// or spaces.
pub static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[()\-\s0-9]{7,20}$").unwrap());

static LINE_BREAK_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\r\n\t]+").unwrap());

/// Collapses every run of carriage returns, newlines and tabs into a single
/// space and trims the result.
///
/// Applying this function more than once yields the same result as applying
/// it once.
pub fn sanitize(input: &str) -> String {
    LINE_BREAK_REGEX.replace_all(input, " ").trim().to_owned()
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_REGEX.is_match(phone)
}

/// Characters outside the basic multilingual plane, such as most emoji,
/// count twice.
pub fn is_long_enough(message: &str) -> bool {
    message.encode_utf16().count() >= MESSAGE_MIN_LEN
}
