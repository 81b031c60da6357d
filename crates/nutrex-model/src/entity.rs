//! Named entities: concept mentions with optional grounding

use crate::draft::DraftModel;
use crate::span::Span;
use serde::{Deserialize, Serialize};

/// A grounded or groundable concept mentioned in the input text.
///
/// All fields start absent: a draft extraction carries only what the
/// generator produced, and `id`, a corrected `label`, and `original_spans`
/// are filled in later by the grounding step. Equality is structural.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NamedEntity {
    /// Ontology identifier, populated during grounding and normalization
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The label (name) of the named thing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Source text spans the mention was extracted from, in order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_spans: Option<Vec<Span>>,
}

impl NamedEntity {
    /// Create an ungrounded entity from its free-text label
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: None,
            label: Some(label.into()),
            original_spans: None,
        }
    }

    /// Builder: set the ontology identifier
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Builder: append a source span
    pub fn with_span(mut self, span: Span) -> Self {
        self.original_spans.get_or_insert_with(Vec::new).push(span);
        self
    }

    /// Replace the ontology identifier
    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = Some(id.into());
    }

    /// Replace the label
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = Some(label.into());
    }

    /// Replace the span list. Spans are valid by construction, so this
    /// cannot bypass the format check.
    pub fn set_spans(&mut self, spans: Vec<Span>) {
        self.original_spans = Some(spans);
    }

    /// Whether grounding has assigned an identifier yet
    pub fn is_grounded(&self) -> bool {
        self.id.is_some()
    }
}

impl DraftModel for NamedEntity {
    const TYPE_NAME: &'static str = "NamedEntity";
    const FIELDS: &'static [&'static str] = &["id", "label", "original_spans"];
    const HAS_SPANS: bool = true;
}

/// The closed set of concrete entity kinds.
///
/// Carries the per-kind conventions the grounding collaborator needs: the
/// expected ontology identifier prefixes and the annotator hint. These are
/// metadata only; nothing here enforces that a grounded `id` actually uses
/// the registered prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Nutrient,
    Disease,
    Phenotype,
    BiologicalProcess,
    Anatomy,
    FoodOrSupplement,
    RelationshipType,
}

impl EntityKind {
    /// Expected ontology identifier prefixes once grounded
    pub fn id_prefixes(&self) -> &'static [&'static str] {
        match self {
            Self::Nutrient => &["CHEBI"],
            Self::Disease => &["MONDO"],
            Self::Phenotype => &["HP"],
            Self::BiologicalProcess => &["GO"],
            Self::Anatomy => &["UBERON"],
            Self::FoodOrSupplement => &["FOODON"],
            Self::RelationshipType => &["RO", "biolink"],
        }
    }

    /// Annotator hint for the grounding collaborator, where one exists
    pub fn annotator(&self) -> Option<&'static str> {
        match self {
            Self::Nutrient => Some("sqlite:obo:chebi"),
            Self::Disease => Some("sqlite:obo:mondo"),
            Self::Phenotype => Some("sqlite:obo:hp"),
            Self::BiologicalProcess => Some("sqlite:obo:go"),
            Self::Anatomy => Some("sqlite:obo:uberon"),
            Self::FoodOrSupplement => Some("sqlite:obo:foodon"),
            Self::RelationshipType => None,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Nutrient => "The name of a nutrient, including vitamins and minerals.",
            Self::Disease => "The name of a disease.",
            Self::Phenotype => "The name of a phenotype.",
            Self::BiologicalProcess => "The name of a biological process.",
            Self::Anatomy => "The name of an anatomical part or system.",
            Self::FoodOrSupplement => "The name of a food or supplement.",
            Self::RelationshipType => {
                "The name of a type of relationship between two entities."
            }
        }
    }

    /// All kinds, in declaration order
    pub fn all() -> &'static [EntityKind] {
        &[
            Self::Nutrient,
            Self::Disease,
            Self::Phenotype,
            Self::BiologicalProcess,
            Self::Anatomy,
            Self::FoodOrSupplement,
            Self::RelationshipType,
        ]
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Nutrient => "nutrient",
            Self::Disease => "disease",
            Self::Phenotype => "phenotype",
            Self::BiologicalProcess => "biological_process",
            Self::Anatomy => "anatomy",
            Self::FoodOrSupplement => "food_or_supplement",
            Self::RelationshipType => "relationship_type",
        };
        write!(f, "{}", name)
    }
}

/// Shared contract of the concrete entity variants
pub trait EntityClass {
    /// Which kind this variant is
    const KIND: EntityKind;

    fn entity(&self) -> &NamedEntity;
    fn entity_mut(&mut self) -> &mut NamedEntity;
}

macro_rules! entity_variant {
    ($(#[$doc:meta])* $name:ident => $kind:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub NamedEntity);

        impl $name {
            /// Create an ungrounded instance from its free-text label
            pub fn new(label: impl Into<String>) -> Self {
                Self(NamedEntity::new(label))
            }
        }

        impl EntityClass for $name {
            const KIND: EntityKind = $kind;

            fn entity(&self) -> &NamedEntity {
                &self.0
            }

            fn entity_mut(&mut self) -> &mut NamedEntity {
                &mut self.0
            }
        }

        impl From<$name> for NamedEntity {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl From<NamedEntity> for $name {
            fn from(value: NamedEntity) -> Self {
                Self(value)
            }
        }

        impl DraftModel for $name {
            const TYPE_NAME: &'static str = stringify!($name);
            const FIELDS: &'static [&'static str] = NamedEntity::FIELDS;
            const HAS_SPANS: bool = true;
        }
    };
}

entity_variant! {
    /// A nutrient, including vitamins and minerals (CHEBI)
    Nutrient => EntityKind::Nutrient
}

entity_variant! {
    /// A disease (MONDO)
    Disease => EntityKind::Disease
}

entity_variant! {
    /// An observable physical or behavioral trait or symptom (HP)
    Phenotype => EntityKind::Phenotype
}

entity_variant! {
    /// An activity or series of activities in a cell or organism (GO)
    BiologicalProcess => EntityKind::BiologicalProcess
}

entity_variant! {
    /// An anatomical part or system (UBERON)
    Anatomy => EntityKind::Anatomy
}

entity_variant! {
    /// A food or supplement (FOODON)
    FoodOrSupplement => EntityKind::FoodOrSupplement
}

entity_variant! {
    /// A type of relationship between two entities (RO / biolink)
    RelationshipType => EntityKind::RelationshipType
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::Span;

    #[test]
    fn test_label_only_construction() {
        let entity = NamedEntity::new("vitamin D");
        assert_eq!(entity.label.as_deref(), Some("vitamin D"));
        assert!(entity.id.is_none());
        assert!(entity.original_spans.is_none());
        assert!(!entity.is_grounded());
    }

    #[test]
    fn test_all_fields_optional() {
        let entity = NamedEntity::default();
        assert_eq!(entity, NamedEntity::default());
    }

    #[test]
    fn test_builder_with_span() {
        let entity = NamedEntity::new("rickets")
            .with_id("MONDO:0005240")
            .with_span(Span::parse("10:25").unwrap());
        assert!(entity.is_grounded());
        assert_eq!(entity.original_spans.as_ref().unwrap().len(), 1);
    }

    #[test]
    fn test_variants_construct_label_only() {
        // Every concrete kind allows id and spans to start absent
        assert!(Nutrient::new("zinc").entity().id.is_none());
        assert!(Disease::new("rickets").entity().id.is_none());
        assert!(Phenotype::new("fever").entity().id.is_none());
        assert!(BiologicalProcess::new("DNA repair").entity().id.is_none());
        assert!(Anatomy::new("liver").entity().id.is_none());
        assert!(FoodOrSupplement::new("butter").entity().id.is_none());
        assert!(RelationshipType::new("treats").entity().id.is_none());
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(Nutrient::new("zinc"), Nutrient::new("zinc"));
        assert_ne!(Nutrient::new("zinc"), Nutrient::new("iron"));
    }

    #[test]
    fn test_kind_metadata() {
        assert_eq!(EntityKind::Nutrient.id_prefixes(), &["CHEBI"]);
        assert_eq!(EntityKind::RelationshipType.id_prefixes(), &["RO", "biolink"]);
        assert_eq!(EntityKind::Disease.annotator(), Some("sqlite:obo:mondo"));
        assert_eq!(EntityKind::RelationshipType.annotator(), None);
        assert_eq!(EntityKind::all().len(), 7);
    }

    #[test]
    fn test_transparent_serialization() {
        let nutrient = Nutrient::new("vitamin D").0.with_id("CHEBI:27300");
        let json = serde_json::to_value(Nutrient(nutrient)).unwrap();
        assert_eq!(json["id"], "CHEBI:27300");
        assert_eq!(json["label"], "vitamin D");
        // Absent spans stay absent rather than serializing as null or []
        assert!(json.get("original_spans").is_none());
    }

    #[test]
    fn test_deserialization_rejects_unknown_field() {
        let draft = r#"{"label": "zinc", "name": "zinc"}"#;
        assert!(serde_json::from_str::<NamedEntity>(draft).is_err());
    }
}
