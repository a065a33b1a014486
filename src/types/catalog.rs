use crate::error::{CoverScoutError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Fixed tier of a product, independent of any answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    Essential,
    Recommended,
    Optional,
}

impl Importance {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Essential => "essential",
            Self::Recommended => "recommended",
            Self::Optional => "optional",
        }
    }
}

/// Business segment a product is especially relevant for. Display only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl Segment {
    pub fn new(id: &str, name: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsuranceProduct {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub importance: Importance,
    #[serde(default)]
    pub coverage_details: Vec<String>,
    #[serde(default)]
    pub relevant_for: Vec<Segment>,
    /// Question id -> weight. Absent entries mean zero.
    #[serde(default)]
    pub relevance_weights: BTreeMap<String, f64>,
}

impl InsuranceProduct {
    pub fn is_essential(&self) -> bool {
        matches!(self.importance, Importance::Essential)
    }

    pub fn weight_for(&self, question_id: &str) -> f64 {
        self.relevance_weights
            .get(question_id)
            .copied()
            .unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub products: Vec<InsuranceProduct>,
}

impl Catalog {
    pub fn new(products: Vec<InsuranceProduct>) -> Self {
        Self { products }
    }

    pub fn get(&self, id: &str) -> Option<&InsuranceProduct> {
        self.products.iter().find(|product| product.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &InsuranceProduct> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for product in &self.products {
            let id = product.id.trim();
            if id.is_empty() {
                return Err(CoverScoutError::InvalidReferenceData(
                    "product ids must be non-empty".to_string(),
                ));
            }
            if !seen.insert(id) {
                return Err(CoverScoutError::InvalidReferenceData(format!(
                    "duplicate product id: {id}"
                )));
            }
            if let Some((question, weight)) = product
                .relevance_weights
                .iter()
                .find(|(_, weight)| !weight.is_finite() || **weight < 0.0)
            {
                return Err(CoverScoutError::InvalidReferenceData(format!(
                    "product '{id}' has invalid weight {weight} for question '{question}'"
                )));
            }
        }
        Ok(())
    }
}
