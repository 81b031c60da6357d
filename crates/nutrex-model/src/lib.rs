//! Nutrex Model - Schema and validation for micronutrient knowledge extraction
//!
//! This crate defines what a valid extracted record looks like: named
//! entities (nutrients, diseases, phenotypes, biological processes, anatomy,
//! foods and supplements), qualified relationship triples between them, and
//! the provenance tying both back to the source text. It validates and
//! coerces the untyped drafts produced by an external text generator, and
//! exposes the interfaces the external grounding step plugs into. It does
//! not produce text, call a language model, or look anything up.

pub mod claim;
pub mod document;
pub mod draft;
pub mod entity;
pub mod error;
pub mod ground;
pub mod provenance;
pub mod relationship;
pub mod result;
pub mod span;
pub mod triple;
pub mod vocab;

pub use claim::{parse_reference_list, CompoundExpression, ScientificClaim};
pub use document::Document;
pub use draft::DraftModel;
pub use entity::{
    Anatomy, BiologicalProcess, Disease, EntityClass, EntityKind, FoodOrSupplement, NamedEntity,
    Nutrient, Phenotype, RelationshipType,
};
pub use error::{Error, Result};
pub use ground::{apply_annotation, Grounder};
pub use provenance::{AnnotatorResult, Publication};
pub use relationship::{
    NutrientToBiologicalProcessRelationship, NutrientToDiseaseRelationship,
    NutrientToHealthStatusRelationship, NutrientToNutrientRelationship,
    NutrientToPhenotypeRelationship, NutrientToSourceRelationship,
};
pub use result::ExtractionResult;
pub use span::{parse_spans, Span};
pub use triple::{TextWithEntity, TextWithTriples, Triple};
pub use vocab::{GoProcessTerm, IdentifierValidator, NullDataOptions};
