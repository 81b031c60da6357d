//! Generic subject-predicate-object statements

use crate::claim::CompoundExpression;
use crate::draft::DraftModel;
use crate::provenance::Publication;
use serde::{Deserialize, Serialize};

/// A qualified subject-predicate-object statement.
///
/// All slots hold pre-grounding free text; a draft extraction may fill any
/// subset of them. The typed relationship variants project onto this shape
/// via their `to_triple` methods.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Triple {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub predicate: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,

    /// A qualifier for the statement as a whole, e.g. "NOT" for negation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualifier: Option<String>,

    /// A modifier for the subject, e.g. "high dose"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_qualifier: Option<String>,

    /// A modifier for the object, e.g. "severe"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_qualifier: Option<String>,
}

impl Triple {
    /// Create an unqualified triple
    pub fn new(
        subject: impl Into<String>,
        predicate: impl Into<String>,
        object: impl Into<String>,
    ) -> Self {
        Self {
            subject: Some(subject.into()),
            predicate: Some(predicate.into()),
            object: Some(object.into()),
            ..Self::default()
        }
    }

    /// Builder: set the statement qualifier
    pub fn with_qualifier(mut self, qualifier: impl Into<String>) -> Self {
        self.qualifier = Some(qualifier.into());
        self
    }
}

impl CompoundExpression for Triple {}

impl DraftModel for Triple {
    const TYPE_NAME: &'static str = "Triple";
    const FIELDS: &'static [&'static str] = &[
        "subject",
        "predicate",
        "object",
        "qualifier",
        "subject_qualifier",
        "object_qualifier",
    ];
}

/// A text containing one or more relations of the Triple type.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TextWithTriples {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publication: Option<Publication>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub triples: Option<Vec<Triple>>,
}

/// A text containing one or more instances of a single kind of entity.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TextWithEntity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publication: Option<Publication>,

    /// Pre-grounding entity mentions, as plain text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<String>>,
}
