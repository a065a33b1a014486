mod catalog;
mod questions;

pub use questions::{business_sizes, industries, BusinessKind, BusinessSize, Industry};

use crate::error::{CoverScoutError, Result};
use crate::types::catalog::{Catalog, InsuranceProduct};
use crate::types::question::{Question, QuestionSet};
use serde::Deserialize;
use std::fmt;
use std::path::Path;

/// Catalog plus question set, immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceData {
    pub catalog: Catalog,
    pub questions: QuestionSet,
}

#[derive(Debug, Deserialize)]
struct ReferenceFile {
    #[serde(default)]
    products: Vec<InsuranceProduct>,
    #[serde(default)]
    questions: Vec<Question>,
}

/// Weight entry naming a product the catalog does not contain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingWeight {
    pub question: String,
    pub product: String,
}

impl fmt::Display for DanglingWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "question '{}' weights unknown product '{}'",
            self.question, self.product
        )
    }
}

impl ReferenceData {
    pub fn shipped() -> Self {
        Self {
            catalog: catalog(),
            questions: question_set(),
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoverScoutError::PathNotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        let data = Self::from_toml_str(&content)
            .map_err(|e| match e {
                CoverScoutError::Toml(inner) => {
                    CoverScoutError::DataParse(format!("{}: {}", path.display(), inner))
                }
                other => other,
            })?;
        tracing::info!(
            path = %path.display(),
            products = data.catalog.len(),
            questions = data.questions.len(),
            "loaded reference data"
        );
        Ok(data)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: ReferenceFile = toml::from_str(content)?;
        let mut data = Self {
            catalog: Catalog::new(file.products),
            questions: QuestionSet::new(file.questions),
        };
        data.validate()?;
        data.link_product_weights()?;
        Ok(data)
    }

    pub fn validate(&self) -> Result<()> {
        self.catalog.validate()?;
        self.questions.validate()
    }

    /// Weight references to products outside the catalog. Scoring skips them.
    pub fn dangling_weights(&self) -> Vec<DanglingWeight> {
        self.questions
            .iter()
            .flat_map(|question| {
                question
                    .relevance_weights
                    .keys()
                    .filter(|product| !self.catalog.contains(product))
                    .map(|product| DanglingWeight {
                        question: question.id.clone(),
                        product: product.clone(),
                    })
            })
            .collect()
    }

    /// Mirrors question-side weights onto each product. The question set is
    /// authoritative; a conflicting product-side entry is rejected.
    fn link_product_weights(&mut self) -> Result<()> {
        for product in &mut self.catalog.products {
            for question in &self.questions.questions {
                let weight = question.weight_for(&product.id);
                match product.relevance_weights.get(&question.id).copied() {
                    Some(declared) if declared != weight => {
                        return Err(CoverScoutError::InvalidReferenceData(format!(
                            "product '{}' declares weight {} for question '{}' but the question declares {}",
                            product.id, declared, question.id, weight
                        )));
                    }
                    _ if weight > 0.0 => {
                        product.relevance_weights.insert(question.id.clone(), weight);
                    }
                    _ => {}
                }
            }
            if let Some(unknown) = product
                .relevance_weights
                .keys()
                .find(|id| self.questions.get(id).is_none())
            {
                return Err(CoverScoutError::InvalidReferenceData(format!(
                    "product '{}' declares a weight for unknown question '{}'",
                    product.id, unknown
                )));
            }
        }
        Ok(())
    }
}

pub fn question_set() -> QuestionSet {
    questions::question_set()
}

pub fn catalog() -> Catalog {
    let questions = questions::question_set();
    let mut catalog = catalog::products();
    for product in &mut catalog.products {
        product.relevance_weights = questions
            .iter()
            .map(|question| (question.id.clone(), question.weight_for(&product.id)))
            .filter(|(_, weight)| *weight > 0.0)
            .collect();
    }
    catalog
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const SMALL_DATA: &str = r#"
[[products]]
id = "gl"
name = "General Liability"
importance = "essential"

[[products]]
id = "cyber"
name = "Cyber Liability"
importance = "recommended"

[[questions]]
id = "data"
prompt = "Do you store customer data?"
answer_kind = "boolean"

[questions.relevance_weights]
cyber = 5.0
gl = 1.0
"#;

    #[test]
    fn shipped_data_satisfies_invariants() {
        let data = ReferenceData::shipped();
        assert!(data.validate().is_ok());
        assert_eq!(data.catalog.len(), 8);
        assert_eq!(data.questions.len(), 8);
        assert!(data.dangling_weights().is_empty());
    }

    #[test]
    fn shipped_catalog_mirrors_question_weights() {
        let data = ReferenceData::shipped();
        let workers = data.catalog.get("workers").expect("workers product");
        assert_eq!(workers.weight_for("employees"), 5.0);
        assert_eq!(workers.weight_for("property"), 0.0);
        for question in data.questions.iter() {
            for product in data.catalog.iter() {
                assert_eq!(product.weight_for(&question.id), question.weight_for(&product.id));
            }
        }
    }

    #[test]
    fn question_options_follow_industries_and_sizes() {
        let questions = question_set();
        let industry = questions.get("industry").expect("industry question");
        assert_eq!(industry.options.len(), industries().len());
        assert_eq!(industry.options[0], "Retail");
        let employees = questions.get("employees").expect("employees question");
        assert_eq!(employees.options[1], "6-25 employees");
    }

    #[test]
    fn from_toml_str_links_product_weights() {
        let data = ReferenceData::from_toml_str(SMALL_DATA).expect("data should load");
        assert_eq!(data.catalog.get("cyber").map(|p| p.weight_for("data")), Some(5.0));
        assert_eq!(data.catalog.get("gl").map(|p| p.weight_for("data")), Some(1.0));
    }

    #[test]
    fn from_toml_str_rejects_conflicting_product_weight() {
        let conflicting = SMALL_DATA.replace(
            "importance = \"recommended\"",
            "importance = \"recommended\"\nrelevance_weights = { data = 2.0 }",
        );
        let err = ReferenceData::from_toml_str(&conflicting).expect_err("conflict should fail");
        assert!(err.to_string().contains("but the question declares 5"));
    }

    #[test]
    fn dangling_weights_are_reported_not_rejected() {
        let with_ghost = SMALL_DATA.replace("gl = 1.0", "gl = 1.0\nghost = 2.0");
        let data = ReferenceData::from_toml_str(&with_ghost).expect("data should load");
        assert_eq!(
            data.dangling_weights(),
            vec![DanglingWeight {
                question: "data".to_string(),
                product: "ghost".to_string(),
            }]
        );
    }

    #[test]
    fn load_reports_missing_file_and_parse_errors() {
        let dir = TempDir::new().expect("temp dir should be created");
        let missing = dir.path().join("missing.toml");
        assert!(matches!(
            ReferenceData::load(&missing),
            Err(CoverScoutError::PathNotFound(_))
        ));

        let broken = dir.path().join("broken.toml");
        fs::write(&broken, "[[products]]\nid = ").expect("broken file should write");
        let err = ReferenceData::load(&broken).expect_err("parse should fail");
        assert!(err.to_string().contains("reference data parse error"));
    }
}
