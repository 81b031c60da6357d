//! Interface to the external grounding collaborator
//!
//! Grounding resolves a free-text mention against a curated term database
//! and hands back an ontology identifier and the preferred label. Only the
//! shape of that exchange is defined here; lookup implementations live with
//! the collaborator.

use crate::entity::NamedEntity;
use crate::error::Result;
use crate::provenance::AnnotatorResult;

/// A grounding lookup over some curated vocabulary.
pub trait Grounder {
    /// Resolve a free-text label to zero or more candidate annotations,
    /// best match first.
    fn ground(&self, label: &str) -> Result<Vec<AnnotatorResult>>;
}

/// Write a grounding annotation back into an entity.
///
/// Sets `id` from the matched identifier and replaces `label` with the
/// preferred term label when one is supplied. Span placement stays with the
/// collaborator, which knows the offsets into the full input text.
pub fn apply_annotation(entity: &mut NamedEntity, annotation: &AnnotatorResult) {
    if let Some(id) = &annotation.object_id {
        entity.set_id(id.clone());
    }
    if let Some(label) = &annotation.object_text {
        entity.set_label(label.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedGrounder;

    impl Grounder for FixedGrounder {
        fn ground(&self, label: &str) -> Result<Vec<AnnotatorResult>> {
            if label == "vitamin D" {
                Ok(vec![AnnotatorResult::new(label, "CHEBI:27300", "vitamin D")])
            } else {
                Ok(Vec::new())
            }
        }
    }

    #[test]
    fn test_apply_annotation_grounds_entity() {
        let mut entity = NamedEntity::new("vitamin D");
        let annotations = FixedGrounder.ground("vitamin D").unwrap();
        apply_annotation(&mut entity, &annotations[0]);
        assert!(entity.is_grounded());
        assert_eq!(entity.id.as_deref(), Some("CHEBI:27300"));
    }

    #[test]
    fn test_no_match_leaves_entity_ungrounded() {
        let entity = NamedEntity::new("moonlight");
        let annotations = FixedGrounder.ground("moonlight").unwrap();
        assert!(annotations.is_empty());
        assert!(!entity.is_grounded());
    }

    #[test]
    fn test_partial_annotation_keeps_existing_label() {
        let mut entity = NamedEntity::new("vit. D");
        let annotation = AnnotatorResult {
            subject_text: Some("vit. D".to_string()),
            object_id: Some("CHEBI:27300".to_string()),
            object_text: None,
        };
        apply_annotation(&mut entity, &annotation);
        assert_eq!(entity.label.as_deref(), Some("vit. D"));
        assert!(entity.is_grounded());
    }
}
