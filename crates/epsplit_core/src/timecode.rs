//! Timecode parsing and canonicalization.
//!
//! Matroska chapter XML carries timestamps as `HH:MM:SS.nnnnnnnnn`
//! strings. mkvmerge accepts (and emits) a trimmed form with trailing
//! zero fraction digits removed, so the canonical representation here
//! is `HH:MM:SS[.fraction]` with the fraction stripped of trailing
//! zeros and a bare trailing `.` removed entirely.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when interpreting a timecode string.
#[derive(Error, Debug)]
pub enum TimecodeError {
    /// The text does not match the `H:MM:SS[.fraction]` pattern.
    #[error("Invalid timecode '{0}': expected H:MM:SS[.fraction]")]
    Invalid(String),
}

/// Canonicalize a timecode string.
///
/// Strips trailing `'0'` characters from the fractional part, then a
/// trailing bare `'.'` if the fraction was consumed entirely. Text
/// without a fractional part is returned unchanged, which makes the
/// operation idempotent:
///
/// - `00:06:00.000000000` -> `00:06:00`
/// - `00:06:00.500000000` -> `00:06:00.5`
/// - `00:06:00` -> `00:06:00`
///
/// This is a purely textual transform; it never inspects the numeric
/// value.
pub fn normalize(text: &str) -> String {
    if !text.contains('.') {
        return text.to_string();
    }
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Parse a timecode string into total seconds.
///
/// Accepts canonical and near-canonical forms: one or more hour
/// digits, two-digit-style minutes and seconds below 60, and an
/// optional fractional part.
pub fn parse_seconds(text: &str) -> Result<f64, TimecodeError> {
    let invalid = || TimecodeError::Invalid(text.to_string());

    let mut parts = text.split(':');
    let (hours, minutes, seconds) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(h), Some(m), Some(s), None) => (h, m, s),
        _ => return Err(invalid()),
    };

    let hours: u64 = hours.parse().map_err(|_| invalid())?;
    let minutes: u64 = minutes.parse().map_err(|_| invalid())?;
    if minutes >= 60 {
        return Err(invalid());
    }

    let (whole, fraction) = match seconds.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (seconds, None),
    };

    let whole: u64 = whole.parse().map_err(|_| invalid())?;
    if whole >= 60 {
        return Err(invalid());
    }

    let fractional = match fraction {
        Some(digits) => {
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            // f64 resolves at most 17 significant digits; anything past
            // that cannot change the value
            let digits = &digits[..digits.len().min(17)];
            let value: u64 = digits.parse().map_err(|_| invalid())?;
            value as f64 / 10f64.powi(digits.len() as i32)
        }
        None => 0.0,
    };

    Ok((hours * 3600 + minutes * 60 + whole) as f64 + fractional)
}

/// A chapter timestamp in canonical trimmed text form.
///
/// Construction normalizes the text, so every stored timecode is
/// canonical regardless of where it came from. The textual form is
/// what gets written back to chapter XML and into mkvmerge `parts:`
/// directives; [`Timecode::seconds`] interprets it numerically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Timecode(String);

impl Timecode {
    /// Create a timecode from raw text, applying canonical trimming.
    pub fn new(text: impl AsRef<str>) -> Self {
        Self(normalize(text.as_ref()))
    }

    /// The canonical text form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Interpret the timecode as total seconds.
    pub fn seconds(&self) -> Result<f64, TimecodeError> {
        parse_seconds(&self.0)
    }
}

// Manual impl so deserialized timecodes go through canonical trimming
// like every other write site.
impl<'de> Deserialize<'de> for Timecode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        Ok(Timecode::new(text))
    }
}

impl fmt::Display for Timecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Timecode {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}
