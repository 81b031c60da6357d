//! Character-offset spans into the original input text

use crate::error::{Error, Result};
use regex::Regex;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Compiled span pattern, shared process-wide.
///
/// Every entity kind validates spans through this single pattern so the
/// behavior is identical across the hierarchy.
fn span_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\d+:\d+$").expect("span pattern is valid"))
}

/// A character-offset range `start:end` into the original input text.
///
/// Offsets are inclusive and 0-indexed; a newline counts as one character.
/// `"10:25"` means the span starting at the 10th character and ending with
/// the 25th. Only the `digits:digits` shape is checked: the source validator
/// does not require `end >= start` or forbid overlapping spans, so neither
/// does this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Span(String);

impl Span {
    /// Validate a candidate span string.
    pub fn parse(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if span_pattern().is_match(&value) {
            Ok(Self(value))
        } else {
            Err(Error::MalformedSpan { value })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The two offset substrings, in order.
    pub fn offsets(&self) -> (&str, &str) {
        // Validated at construction, the separator is always present
        match self.0.split_once(':') {
            Some(parts) => parts,
            None => (&self.0, ""),
        }
    }
}

/// Validate a whole candidate span list, reporting the first offender.
pub fn parse_spans<I, S>(values: I) -> Result<Vec<Span>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    values.into_iter().map(Span::parse).collect()
}

impl FromStr for Span {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Span {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Span {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Span::parse(value).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_span() {
        let span = Span::parse("10:25").unwrap();
        assert_eq!(span.as_str(), "10:25");
        assert_eq!(span.offsets(), ("10", "25"));
    }

    #[test]
    fn test_zero_offsets() {
        assert!(Span::parse("0:0").is_ok());
    }

    #[test]
    fn test_rejects_dash_separator() {
        let err = Span::parse("10-25").unwrap_err();
        assert!(matches!(err, Error::MalformedSpan { value } if value == "10-25"));
    }

    #[test]
    fn test_rejects_partial_and_empty() {
        assert!(Span::parse("10:").is_err());
        assert!(Span::parse(":25").is_err());
        assert!(Span::parse("").is_err());
        assert!(Span::parse("a:b").is_err());
        assert!(Span::parse("10:25 ").is_err());
    }

    #[test]
    fn test_end_before_start_is_not_rejected() {
        // Shape-only validation; ordering is left to downstream consumers
        assert!(Span::parse("10:5").is_ok());
    }

    #[test]
    fn test_parse_spans_reports_offender() {
        let err = parse_spans(["1:2", "3-4"]).unwrap_err();
        assert!(matches!(err, Error::MalformedSpan { value } if value == "3-4"));
        assert_eq!(parse_spans(["1:2", "3:4"]).unwrap().len(), 2);
    }

    #[test]
    fn test_serde_round_trip() {
        let span = Span::parse("7:19").unwrap();
        let json = serde_json::to_string(&span).unwrap();
        assert_eq!(json, "\"7:19\"");
        let back: Span = serde_json::from_str(&json).unwrap();
        assert_eq!(back, span);
    }

    #[test]
    fn test_deserialize_rejects_malformed() {
        assert!(serde_json::from_str::<Span>("\"10-25\"").is_err());
    }
}
