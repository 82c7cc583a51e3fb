//! Inputs with their expected verdicts, shared by the tests of every crate
//! that implements the contact field rules.

/// Email candidates and whether they are accepted.
pub const EMAIL_CASES: &[(&str, bool)] = &[
    ("a@b.co", true),
    ("ada@example.com", true),
    ("first.last+tag@sub.example.org", true),
    ("a@b", false),
    ("a.com", false),
    ("@b.co", false),
    ("a@.", false),
    ("a@@b.co", false),
    ("a b@c.de", false),
    ("not-an-email", false),
];

/// Non-empty phone candidates and whether they are accepted.
pub const PHONE_CASES: &[(&str, bool)] = &[
    ("+91 89541 24805", true),
    ("(030) 123-4567", true),
    ("1234567", true),
    ("12345678901234567890", true),
    ("123456", false),
    ("123456789012345678901", false),
    ("abc", false),
    ("++1234567", false),
    ("1234567+", false),
    ("phone: 1234567", false),
];

/// Sanitized messages and whether they are long enough.
pub const MESSAGE_CASES: &[(&str, bool)] = &[
    ("1234567890", true),
    ("Hello there, this is a test.", true),
    ("äöüäöüäöüä", true),
    ("😀😀😀😀😀", true),
    ("😀😀😀😀", false),
    ("123456789", false),
    ("short", false),
];
