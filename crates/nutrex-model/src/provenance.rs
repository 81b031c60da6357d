//! Source publications and grounding annotations

use crate::draft::DraftModel;
use serde::{Deserialize, Serialize};

/// Metadata for the publication a text was drawn from.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Publication {
    /// The publication identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// The abstract of the publication. Named `abstract` on the wire;
    /// renamed here because that is a reserved word in Rust.
    #[serde(rename = "abstract", skip_serializing_if = "Option::is_none")]
    pub abstract_text: Option<String>,

    /// Title and abstract (and optionally full text) combined
    #[serde(skip_serializing_if = "Option::is_none")]
    pub combined_text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_text: Option<String>,
}

impl DraftModel for Publication {
    const TYPE_NAME: &'static str = "Publication";
    const FIELDS: &'static [&'static str] =
        &["id", "title", "abstract", "combined_text", "full_text"];
}

/// The outcome of one grounding lookup: a free-text mention resolved
/// against a curated term database.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnnotatorResult {
    /// The mention text that was looked up
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_text: Option<String>,

    /// The matched ontology identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_id: Option<String>,

    /// The preferred label of the matched term
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_text: Option<String>,
}

impl AnnotatorResult {
    pub fn new(
        subject_text: impl Into<String>,
        object_id: impl Into<String>,
        object_text: impl Into<String>,
    ) -> Self {
        Self {
            subject_text: Some(subject_text.into()),
            object_id: Some(object_id.into()),
            object_text: Some(object_text.into()),
        }
    }
}

impl DraftModel for AnnotatorResult {
    const TYPE_NAME: &'static str = "AnnotatorResult";
    const FIELDS: &'static [&'static str] = &["subject_text", "object_id", "object_text"];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publication_round_trip() {
        let publication = Publication {
            id: Some("PMID:12345".to_string()),
            title: Some("Vitamin D and bone health".to_string()),
            ..Publication::default()
        };
        let json = serde_json::to_string(&publication).unwrap();
        let back: Publication = serde_json::from_str(&json).unwrap();
        assert_eq!(back, publication);
    }

    #[test]
    fn test_absent_fields_not_serialized() {
        let json = serde_json::to_value(Publication::default()).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }

    #[test]
    fn test_annotator_result() {
        let result = AnnotatorResult::new("vitamin D", "CHEBI:27300", "vitamin D");
        assert_eq!(result.object_id.as_deref(), Some("CHEBI:27300"));
    }
}
