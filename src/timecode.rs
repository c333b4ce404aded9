//! Lap-time notation.
//!
//! Times are written `MM'SS'CC` (minutes, seconds, hundredths). Internally a
//! time is kept as an integer number of hundredths so that best-time and tie
//! detection never depend on floating-point equality.

use crate::error::LapboardError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rendered in place of a time that is missing, zero or not finite.
pub const PLACEHOLDER: &str = "--'--'--";

// Accepted between digit groups by the flattened fallback form.
const LEGACY_SEPARATORS: [char; 3] = ['\'', ':', '.'];

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct LapTime(u64);

impl LapTime {
    pub const ZERO: LapTime = LapTime(0);

    pub fn from_hundredths(hundredths: u64) -> Self {
        Self(hundredths)
    }

    pub fn from_parts(minutes: u64, seconds: u64, hundredths: u64) -> Option<Self> {
        minutes
            .checked_mul(6000)?
            .checked_add(seconds.checked_mul(100)?)?
            .checked_add(hundredths)
            .map(Self)
    }

    /// Rounds to the nearest hundredth. Negative or non-finite input has no
    /// representation.
    pub fn from_seconds(seconds: f64) -> Option<Self> {
        if !seconds.is_finite() || seconds < 0.0 {
            return None;
        }
        let scaled = (seconds * 100.0).round();
        if scaled > u64::MAX as f64 {
            return None;
        }
        Some(Self(scaled as u64))
    }

    #[inline(always)]
    pub fn hundredths(self) -> u64 {
        self.0
    }

    pub fn as_seconds(self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// A zero time means "did not finish / no record".
    #[inline(always)]
    pub fn is_valid(self) -> bool {
        self.0 > 0
    }

    /// Gap to a faster `leader`, zero when this time is not behind.
    pub fn behind(self, leader: LapTime) -> LapTime {
        Self(self.0.saturating_sub(leader.0))
    }
}

impl fmt::Display for LapTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let minutes = self.0 / 6000;
        let seconds = (self.0 / 100) % 60;
        let hundredths = self.0 % 100;
        write!(f, "{:02}'{:02}'{:02}", minutes, seconds, hundredths)
    }
}

impl FromStr for LapTime {
    type Err = LapboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s).ok_or_else(|| LapboardError::Validation(format!("Invalid lap time '{}'", s)))
    }
}

/// Parses a time string. Returns `None` for empty or unreadable input; a
/// decoded zero is returned as `LapTime::ZERO` and is not a valid finish.
pub fn decode(text: &str) -> Option<LapTime> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    parse_canonical(text).or_else(|| parse_flattened(text))
}

pub fn decode_opt(text: Option<&str>) -> Option<LapTime> {
    text.and_then(decode)
}

pub fn decode_seconds(text: &str) -> Option<f64> {
    decode(text).map(LapTime::as_seconds)
}

pub fn encode(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return PLACEHOLDER.to_string();
    }
    match LapTime::from_seconds(seconds) {
        Some(time) => time.to_string(),
        None => PLACEHOLDER.to_string(),
    }
}

/// Like `encode`, for an already decoded time.
pub fn encode_time(time: Option<LapTime>) -> String {
    match time {
        Some(t) if t.is_valid() => t.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

// M+'SS'CC, seconds may be a single digit.
fn parse_canonical(text: &str) -> Option<LapTime> {
    let mut parts = text.split('\'');
    let (minutes, seconds, hundredths) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }
    if !all_digits(minutes) || !all_digits(seconds) || !all_digits(hundredths) {
        return None;
    }
    if seconds.len() > 2 || hundredths.len() != 2 {
        return None;
    }
    LapTime::from_parts(
        minutes.parse().ok()?,
        seconds.parse().ok()?,
        hundredths.parse().ok()?,
    )
}

// Legacy rows: digits with stray separators, read right to left as CC, SS,
// then everything else as minutes.
fn parse_flattened(text: &str) -> Option<LapTime> {
    if !text
        .chars()
        .all(|c| c.is_ascii_digit() || LEGACY_SEPARATORS.contains(&c))
    {
        return None;
    }
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    if digits.len() < 4 {
        return None;
    }
    let (minutes, rest) = digits.split_at(digits.len() - 4);
    let minutes = if minutes.is_empty() {
        0
    } else {
        minutes.parse().ok()?
    };
    LapTime::from_parts(minutes, rest[..2].parse().ok()?, rest[2..].parse().ok()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_rejects_wrong_group_widths() {
        assert_eq!(parse_canonical("1'234'56"), None);
        assert_eq!(parse_canonical("1'23'4"), None);
        assert_eq!(parse_canonical("1'23'45'67"), None);
    }

    #[test]
    fn flattened_needs_four_digits() {
        assert_eq!(parse_flattened("123"), None);
        assert_eq!(parse_flattened("2345"), Some(LapTime::from_hundredths(2345)));
        assert_eq!(
            parse_flattened("1:23.45"),
            LapTime::from_parts(1, 23, 45)
        );
    }

    #[test]
    fn minute_overflow_is_rejected() {
        assert_eq!(decode("99999999999999999999'00'00"), None);
    }
}
