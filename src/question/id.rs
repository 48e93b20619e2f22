//! Question identifiers
//!
//! Question IDs are derived from the wall clock in milliseconds at the time
//! a question is authored, which keeps them compatible with lists saved by
//! earlier front ends. They are stored and displayed as decimal strings.

use std::{fmt::Display, num::ParseIntError, str::FromStr};

use serde_with::{DeserializeFromStr, SerializeDisplay};
use web_time::{SystemTime, UNIX_EPOCH};

/// A unique identifier for a stored question
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, SerializeDisplay, DeserializeFromStr,
)]
pub struct QuestionId(u64);

impl QuestionId {
    /// Creates a fresh ID that sorts after `previous`
    ///
    /// The ID is the current time in milliseconds, bumped past `previous`
    /// when the clock has not moved forward since it was issued.
    ///
    /// # Arguments
    ///
    /// * `previous` - The most recently issued ID, if any
    pub fn after(previous: Option<Self>) -> Self {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| {
                u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
            });

        match previous {
            Some(Self(last)) if last >= now => Self(last.saturating_add(1)),
            _ => Self(now),
        }
    }
}

impl Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for QuestionId {
    type Err = ParseIntError;

    /// Parses an ID from its decimal representation
    ///
    /// # Errors
    ///
    /// Returns a `ParseIntError` if the string is not a decimal number.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

impl From<u64> for QuestionId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_question_id_after_is_monotonic() {
        let first = QuestionId::after(None);
        let second = QuestionId::after(Some(first));
        let third = QuestionId::after(Some(second));

        assert!(first < second);
        assert!(second < third);
    }

    #[test]
    fn test_question_id_after_future_previous() {
        let far_future = QuestionId(u64::MAX - 1);
        assert_eq!(QuestionId::after(Some(far_future)), QuestionId(u64::MAX));
    }

    #[test]
    fn test_question_id_serializes_as_string() {
        let id = QuestionId(1_712_345_678_901);
        let serialized = serde_json::to_string(&id).unwrap();
        assert_eq!(serialized, "\"1712345678901\"");

        let deserialized: QuestionId = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, id);
    }

    #[test]
    fn test_question_id_rejects_garbage() {
        assert!(QuestionId::from_str("abc").is_err());
        assert!(serde_json::from_str::<QuestionId>("\"\"").is_err());
        assert!(serde_json::from_str::<QuestionId>("42").is_err());
    }
}
