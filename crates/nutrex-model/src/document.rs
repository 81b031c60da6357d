//! The Document aggregate: one fully extracted record per input text

use crate::claim::ScientificClaim;
use crate::draft::{prepare_list, DraftModel};
use crate::error::Result;
use crate::relationship::{
    NutrientToBiologicalProcessRelationship, NutrientToDiseaseRelationship,
    NutrientToHealthStatusRelationship, NutrientToNutrientRelationship,
    NutrientToPhenotypeRelationship, NutrientToSourceRelationship,
};
use crate::span::Span;
use crate::triple::Triple;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The extracted micronutrient knowledge for one input text.
///
/// The aggregate root. `id` is the one required field in the entire entity
/// hierarchy: every other entity gets its identifier assigned during
/// grounding, but a document represents the extraction unit itself and is
/// keyed by its input identifier from creation. Absence of a relationship
/// list is valid; an invalid entry inside a present list is not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Document {
    /// Identifier of the extraction unit, required at construction
    pub id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_spans: Option<Vec<Span>>,

    /// Relationships between nutrients and diseases
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutrient_to_disease_relationships: Option<Vec<NutrientToDiseaseRelationship>>,

    /// Relationships between nutrients and biological phenotypes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutrient_to_phenotype_relationships: Option<Vec<NutrientToPhenotypeRelationship>>,

    /// Relationships between nutrients and biological processes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutrient_to_biological_process_relationships:
        Option<Vec<NutrientToBiologicalProcessRelationship>>,

    /// Relationships between nutrients and the health of a body part or system
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutrient_to_health_status_relationships:
        Option<Vec<NutrientToHealthStatusRelationship>>,

    /// Relationships between nutrients and their food or supplement sources
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutrient_to_source_relationships: Option<Vec<NutrientToSourceRelationship>>,

    /// Relationships between pairs of nutrients
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutrient_to_nutrient_relationships: Option<Vec<NutrientToNutrientRelationship>>,
}

impl Document {
    /// Create an empty document for the given extraction unit
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: None,
            original_spans: None,
            nutrient_to_disease_relationships: None,
            nutrient_to_phenotype_relationships: None,
            nutrient_to_biological_process_relationships: None,
            nutrient_to_health_status_relationships: None,
            nutrient_to_source_relationships: None,
            nutrient_to_nutrient_relationships: None,
        }
    }

    /// Append a nutrient-disease relationship
    pub fn push_disease_relationship(&mut self, relationship: NutrientToDiseaseRelationship) {
        self.nutrient_to_disease_relationships
            .get_or_insert_with(Vec::new)
            .push(relationship);
    }

    /// Append a nutrient-phenotype relationship
    pub fn push_phenotype_relationship(&mut self, relationship: NutrientToPhenotypeRelationship) {
        self.nutrient_to_phenotype_relationships
            .get_or_insert_with(Vec::new)
            .push(relationship);
    }

    /// Append a nutrient-biological-process relationship
    pub fn push_process_relationship(
        &mut self,
        relationship: NutrientToBiologicalProcessRelationship,
    ) {
        self.nutrient_to_biological_process_relationships
            .get_or_insert_with(Vec::new)
            .push(relationship);
    }

    /// Append a nutrient-health-status relationship
    pub fn push_health_status_relationship(
        &mut self,
        relationship: NutrientToHealthStatusRelationship,
    ) {
        self.nutrient_to_health_status_relationships
            .get_or_insert_with(Vec::new)
            .push(relationship);
    }

    /// Append a nutrient-source relationship
    pub fn push_source_relationship(&mut self, relationship: NutrientToSourceRelationship) {
        self.nutrient_to_source_relationships
            .get_or_insert_with(Vec::new)
            .push(relationship);
    }

    /// Append a nutrient-nutrient relationship
    pub fn push_nutrient_relationship(&mut self, relationship: NutrientToNutrientRelationship) {
        self.nutrient_to_nutrient_relationships
            .get_or_insert_with(Vec::new)
            .push(relationship);
    }

    /// Total number of relationships across all six kinds
    pub fn relationship_count(&self) -> usize {
        fn len<T>(list: &Option<Vec<T>>) -> usize {
            list.as_ref().map(Vec::len).unwrap_or(0)
        }
        len(&self.nutrient_to_disease_relationships)
            + len(&self.nutrient_to_phenotype_relationships)
            + len(&self.nutrient_to_biological_process_relationships)
            + len(&self.nutrient_to_health_status_relationships)
            + len(&self.nutrient_to_source_relationships)
            + len(&self.nutrient_to_nutrient_relationships)
    }

    /// Whether the document carries no relationships at all
    pub fn is_empty(&self) -> bool {
        self.relationship_count() == 0
    }

    /// A claim-level view across all relationship lists, in kind order
    pub fn claims(&self) -> Vec<&dyn ScientificClaim> {
        let mut claims: Vec<&dyn ScientificClaim> = Vec::new();
        fn extend<'a, T: ScientificClaim>(
            claims: &mut Vec<&'a dyn ScientificClaim>,
            list: &'a Option<Vec<T>>,
        ) {
            if let Some(list) = list {
                claims.extend(list.iter().map(|claim| claim as &dyn ScientificClaim));
            }
        }
        extend(&mut claims, &self.nutrient_to_disease_relationships);
        extend(&mut claims, &self.nutrient_to_phenotype_relationships);
        extend(&mut claims, &self.nutrient_to_biological_process_relationships);
        extend(&mut claims, &self.nutrient_to_health_status_relationships);
        extend(&mut claims, &self.nutrient_to_source_relationships);
        extend(&mut claims, &self.nutrient_to_nutrient_relationships);
        claims
    }

    /// Project every relationship onto the generic triple shape
    pub fn triples(&self) -> Vec<Triple> {
        let mut triples = Vec::with_capacity(self.relationship_count());
        fn extend<T>(triples: &mut Vec<Triple>, list: &Option<Vec<T>>, project: fn(&T) -> Triple) {
            if let Some(list) = list {
                triples.extend(list.iter().map(project));
            }
        }
        extend(
            &mut triples,
            &self.nutrient_to_disease_relationships,
            NutrientToDiseaseRelationship::to_triple,
        );
        extend(
            &mut triples,
            &self.nutrient_to_phenotype_relationships,
            NutrientToPhenotypeRelationship::to_triple,
        );
        extend(
            &mut triples,
            &self.nutrient_to_biological_process_relationships,
            NutrientToBiologicalProcessRelationship::to_triple,
        );
        extend(
            &mut triples,
            &self.nutrient_to_health_status_relationships,
            NutrientToHealthStatusRelationship::to_triple,
        );
        extend(
            &mut triples,
            &self.nutrient_to_source_relationships,
            NutrientToSourceRelationship::to_triple,
        );
        extend(
            &mut triples,
            &self.nutrient_to_nutrient_relationships,
            NutrientToNutrientRelationship::to_triple,
        );
        triples
    }
}

impl DraftModel for Document {
    const TYPE_NAME: &'static str = "Document";
    const FIELDS: &'static [&'static str] = &[
        "id",
        "label",
        "original_spans",
        "nutrient_to_disease_relationships",
        "nutrient_to_phenotype_relationships",
        "nutrient_to_biological_process_relationships",
        "nutrient_to_health_status_relationships",
        "nutrient_to_source_relationships",
        "nutrient_to_nutrient_relationships",
    ];
    const REQUIRED: &'static [&'static str] = &["id"];
    const HAS_SPANS: bool = true;

    fn prepare_children(object: &mut Map<String, Value>) -> Result<()> {
        prepare_list::<NutrientToDiseaseRelationship>(object, "nutrient_to_disease_relationships")?;
        prepare_list::<NutrientToPhenotypeRelationship>(
            object,
            "nutrient_to_phenotype_relationships",
        )?;
        prepare_list::<NutrientToBiologicalProcessRelationship>(
            object,
            "nutrient_to_biological_process_relationships",
        )?;
        prepare_list::<NutrientToHealthStatusRelationship>(
            object,
            "nutrient_to_health_status_relationships",
        )?;
        prepare_list::<NutrientToSourceRelationship>(object, "nutrient_to_source_relationships")?;
        prepare_list::<NutrientToNutrientRelationship>(
            object,
            "nutrient_to_nutrient_relationships",
        )?;
        Ok(())
    }
}
