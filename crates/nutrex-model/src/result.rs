//! The extraction envelope returned by the pipeline

use crate::document::Document;
use crate::draft::{prepare_list, DraftModel};
use crate::entity::NamedEntity;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A result of extracting knowledge from text.
///
/// Ties the raw input text, the raw unparsed generator completion, and the
/// prompt that produced it to the typed [`Document`] built from them. The
/// raw completion and prompt are preserved for auditability and
/// reprocessing, never interpreted by this layer.
///
/// `named_entities` is a flat post-grounding view of the entities reachable
/// through the document's relationships; the two views are reconciled by the
/// grounding collaborator, not kept in sync here.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExtractionResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_title: Option<String>,

    /// The source text the document was extracted from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_text: Option<String>,

    /// The raw, unparsed output of the text-generation collaborator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_completion_output: Option<String>,

    /// The prompt used to produce the completion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,

    /// The complex object extracted from the text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extracted_object: Option<Document>,

    /// Named entities extracted from the text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub named_entities: Option<Vec<NamedEntity>>,
}

impl ExtractionResult {
    /// Create an envelope around the source text
    pub fn new(input_text: impl Into<String>) -> Self {
        Self {
            input_text: Some(input_text.into()),
            ..Self::default()
        }
    }

    /// Builder: set the extracted document
    pub fn with_document(mut self, document: Document) -> Self {
        self.extracted_object = Some(document);
        self
    }

    /// Builder: set the raw generator completion
    pub fn with_raw_completion(mut self, raw: impl Into<String>) -> Self {
        self.raw_completion_output = Some(raw.into());
        self
    }

    /// Serialize to JSON, preserving absent-vs-present distinctions.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Strict typed deserialization of a previously serialized result.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl DraftModel for ExtractionResult {
    const TYPE_NAME: &'static str = "ExtractionResult";
    const FIELDS: &'static [&'static str] = &[
        "input_id",
        "input_title",
        "input_text",
        "raw_completion_output",
        "prompt",
        "extracted_object",
        "named_entities",
    ];

    fn prepare_children(object: &mut Map<String, Value>) -> Result<()> {
        if let Some(document) = object.get_mut("extracted_object") {
            if !document.is_null() {
                Document::prepare(document)?;
            }
        }
        prepare_list::<NamedEntity>(object, "named_entities")?;
        Ok(())
    }
}
