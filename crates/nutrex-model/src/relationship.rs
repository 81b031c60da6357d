//! Typed nutrient relationship claims
//!
//! Each variant is structurally a triple, but subject and object hold
//! pre-grounding free text rather than entity references; the grounding
//! step resolves them downstream. Every field is optional so that a
//! partially specified draft is still a valid instance. Field tables are
//! closed: an unrecognized key in generator output is a structural error.

use crate::claim::{CompoundExpression, ScientificClaim};
use crate::draft::DraftModel;
use crate::triple::Triple;
use serde::{Deserialize, Serialize};

macro_rules! nutrient_relationship {
    (
        $(#[$doc:meta])*
        $name:ident,
        object_field: $object:ident
    ) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
        #[serde(deny_unknown_fields)]
        pub struct $name {
            /// The nutrient in the triple, including vitamins and minerals
            #[serde(skip_serializing_if = "Option::is_none")]
            pub nutrient: Option<String>,

            /// The relationship label connecting subject and object
            #[serde(skip_serializing_if = "Option::is_none")]
            pub relationship: Option<String>,

            #[serde(skip_serializing_if = "Option::is_none")]
            pub $object: Option<String>,

            /// Supporting references, identified by number only
            #[serde(skip_serializing_if = "Option::is_none")]
            pub references: Option<Vec<String>>,
        }

        impl $name {
            pub fn new(
                nutrient: impl Into<String>,
                relationship: impl Into<String>,
                object: impl Into<String>,
            ) -> Self {
                Self {
                    nutrient: Some(nutrient.into()),
                    relationship: Some(relationship.into()),
                    $object: Some(object.into()),
                    references: None,
                }
            }

            /// Builder: set the supporting references
            pub fn with_references(mut self, references: Vec<String>) -> Self {
                self.references = Some(references);
                self
            }

            /// The kind-specific object slot, as free text
            pub fn object_text(&self) -> Option<&str> {
                self.$object.as_deref()
            }

            /// Project onto the generic triple shape
            pub fn to_triple(&self) -> Triple {
                Triple {
                    subject: self.nutrient.clone(),
                    predicate: self.relationship.clone(),
                    object: self.$object.clone(),
                    ..Triple::default()
                }
            }
        }

        impl CompoundExpression for $name {}

        impl ScientificClaim for $name {
            fn references(&self) -> Option<&[String]> {
                self.references.as_deref()
            }
        }

        impl DraftModel for $name {
            const TYPE_NAME: &'static str = stringify!($name);
            const FIELDS: &'static [&'static str] =
                &["nutrient", "relationship", stringify!($object), "references"];
        }
    };
}

nutrient_relationship! {
    /// A relationship between a nutrient and a disease
    NutrientToDiseaseRelationship,
    object_field: disease
}

nutrient_relationship! {
    /// A relationship between a nutrient and an observable phenotype
    NutrientToPhenotypeRelationship,
    object_field: phenotype
}

nutrient_relationship! {
    /// A relationship between a nutrient and a biological process
    NutrientToBiologicalProcessRelationship,
    object_field: process
}

nutrient_relationship! {
    /// A relationship between a nutrient and the health of an anatomical
    /// part or system
    NutrientToHealthStatusRelationship,
    object_field: anatomy
}

nutrient_relationship! {
    /// A relationship between a nutrient and its source in food or
    /// supplements
    NutrientToSourceRelationship,
    object_field: source
}

/// A relationship between one nutrient and another.
///
/// Subject and object are both nutrients, so the slots carry distinct
/// names; the relation is not symmetric.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NutrientToNutrientRelationship {
    /// The subject nutrient of the triple
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutrient_subject: Option<String>,

    /// The relationship label connecting the two nutrients
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationship: Option<String>,

    /// The object nutrient of the triple
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutrient_object: Option<String>,

    /// Supporting references, identified by number only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub references: Option<Vec<String>>,
}

impl NutrientToNutrientRelationship {
    pub fn new(
        nutrient_subject: impl Into<String>,
        relationship: impl Into<String>,
        nutrient_object: impl Into<String>,
    ) -> Self {
        Self {
            nutrient_subject: Some(nutrient_subject.into()),
            relationship: Some(relationship.into()),
            nutrient_object: Some(nutrient_object.into()),
            references: None,
        }
    }

    /// Builder: set the supporting references
    pub fn with_references(mut self, references: Vec<String>) -> Self {
        self.references = Some(references);
        self
    }

    /// Project onto the generic triple shape
    pub fn to_triple(&self) -> Triple {
        Triple {
            subject: self.nutrient_subject.clone(),
            predicate: self.relationship.clone(),
            object: self.nutrient_object.clone(),
            ..Triple::default()
        }
    }
}

impl CompoundExpression for NutrientToNutrientRelationship {}

impl ScientificClaim for NutrientToNutrientRelationship {
    fn references(&self) -> Option<&[String]> {
        self.references.as_deref()
    }
}

impl DraftModel for NutrientToNutrientRelationship {
    const TYPE_NAME: &'static str = "NutrientToNutrientRelationship";
    const FIELDS: &'static [&'static str] = &[
        "nutrient_subject",
        "relationship",
        "nutrient_object",
        "references",
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use serde_json::json;

    #[test]
    fn test_disease_relationship_fields_unchanged() {
        let relationship =
            NutrientToDiseaseRelationship::new("vitamin D", "DECREASES RISK OF", "rickets")
                .with_references(vec!["3".to_string()]);

        assert_eq!(relationship.nutrient.as_deref(), Some("vitamin D"));
        assert_eq!(relationship.relationship.as_deref(), Some("DECREASES RISK OF"));
        assert_eq!(relationship.disease.as_deref(), Some("rickets"));
        assert_eq!(relationship.references.as_deref(), Some(&["3".to_string()][..]));
    }

    #[test]
    fn test_partial_draft_is_valid() {
        let relationship = NutrientToPhenotypeRelationship {
            nutrient: Some("iron".to_string()),
            ..Default::default()
        };
        assert!(relationship.relationship.is_none());
        assert!(!relationship.is_referenced());
    }

    #[test]
    fn test_to_triple() {
        let triple = NutrientToHealthStatusRelationship::new("calcium", "SUPPORTS HEALTH OF", "teeth")
            .to_triple();
        assert_eq!(triple, Triple::new("calcium", "SUPPORTS HEALTH OF", "teeth"));
    }

    #[test]
    fn test_nutrient_to_nutrient_asymmetric_slots() {
        let relationship =
            NutrientToNutrientRelationship::new("vitamin D", "ENHANCES ABSORPTION OF", "calcium");
        let triple = relationship.to_triple();
        assert_eq!(triple.subject.as_deref(), Some("vitamin D"));
        assert_eq!(triple.object.as_deref(), Some("calcium"));
    }

    #[test]
    fn test_nutrient_field_rejected_on_nutrient_pair() {
        // The pair variant names its slots nutrient_subject / nutrient_object
        let err = NutrientToNutrientRelationship::from_draft(json!({
            "nutrient": "vitamin D",
            "relationship": "INTERACTS WITH",
        }))
        .unwrap_err();
        match err {
            Error::UnknownField { type_name, field } => {
                assert_eq!(type_name, "NutrientToNutrientRelationship");
                assert_eq!(field, "nutrient");
            }
            other => panic!("expected UnknownField, got {other:?}"),
        }
    }

    #[test]
    fn test_extra_field_rejected_on_every_variant() {
        let draft = json!({"nutrient": "zinc", "confidence": 0.9});
        assert!(NutrientToDiseaseRelationship::from_draft(draft.clone()).is_err());
        assert!(NutrientToPhenotypeRelationship::from_draft(draft.clone()).is_err());
        assert!(NutrientToBiologicalProcessRelationship::from_draft(draft.clone()).is_err());
        assert!(NutrientToHealthStatusRelationship::from_draft(draft.clone()).is_err());
        assert!(NutrientToSourceRelationship::from_draft(draft).is_err());
    }

    #[test]
    fn test_serde_round_trip_preserves_absent_references() {
        let relationship = NutrientToSourceRelationship::new("vitamin A", "PROVIDED BY", "butter");
        let json = serde_json::to_value(&relationship).unwrap();
        assert!(json.get("references").is_none());
        let back: NutrientToSourceRelationship = serde_json::from_value(json).unwrap();
        assert_eq!(back, relationship);
    }
}
