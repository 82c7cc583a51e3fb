use std::ops::Deref;

use serde::Deserialize;

/// A duration written as whitespace separated parts like `"1d 2h 3m 4s"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Duration(pub std::time::Duration);

impl From<Duration> for std::time::Duration {
    fn from(value: Duration) -> Self {
        value.0
    }
}

impl Deref for Duration {
    type Target = std::time::Duration;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::str::FromStr for Duration {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace()
            .map(parse_part)
            .sum::<Result<u64, _>>()
            .map(|secs| Self(std::time::Duration::from_secs(secs)))
    }
}

fn parse_part(part: &str) -> Result<u64, &'static str> {
    let unit_start = part
        .find(|c: char| !c.is_ascii_digit())
        .ok_or("Missing duration unit")?;
    let (value, unit) = part.split_at(unit_start);
    let value = value
        .parse::<u64>()
        .map_err(|_| "Missing duration value")?;
    let factor = match unit {
        "s" => 1,
        "m" => 60,
        "h" => 60 * 60,
        "d" => 24 * 60 * 60,
        _ => return Err("Invalid duration unit"),
    };
    value.checked_mul(factor).ok_or("Duration too long")
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer)?
            .parse()
            .map_err(serde::de::Error::custom)
    }
}
