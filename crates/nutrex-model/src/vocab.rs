//! Controlled-vocabulary sentinel values and external term types

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Sentinel values the generator may emit where no real data exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NullDataOptions {
    UnspecifiedMethodOfAdministration,
    NotApplicable,
    NotMentioned,
}

impl NullDataOptions {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UnspecifiedMethodOfAdministration => "UNSPECIFIED_METHOD_OF_ADMINISTRATION",
            Self::NotApplicable => "NOT_APPLICABLE",
            Self::NotMentioned => "NOT_MENTIONED",
        }
    }
}

impl std::fmt::Display for NullDataOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Membership check for an externally managed controlled vocabulary.
///
/// Supplied by the grounding collaborator; this layer never hard-codes
/// vocabulary contents.
pub trait IdentifierValidator {
    fn is_valid(&self, id: &str) -> bool;
}

impl<F: Fn(&str) -> bool> IdentifierValidator for F {
    fn is_valid(&self, id: &str) -> bool {
        self(id)
    }
}

/// An identifier from the GO biological-process vocabulary.
///
/// Opaque here: the vocabulary itself lives with the grounding collaborator,
/// so values are either taken on trust pre-grounding or checked against an
/// injected validator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GoProcessTerm(String);

impl GoProcessTerm {
    /// Wrap a term without vocabulary membership checking
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Wrap a term after checking it against the collaborator's vocabulary
    pub fn checked(value: impl Into<String>, validator: &dyn IdentifierValidator) -> Result<Self> {
        let value = value.into();
        if validator.is_valid(&value) {
            Ok(Self(value))
        } else {
            Err(Error::InvalidIdentifier { value })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for GoProcessTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
