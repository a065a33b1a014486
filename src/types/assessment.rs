use crate::types::catalog::InsuranceProduct;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Display summary read from fixed questions. Not used in scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BusinessProfile {
    pub industry: Option<String>,
    pub employees: Option<String>,
    pub has_commercial_property: bool,
    pub offers_professional_services: bool,
    pub uses_vehicles: bool,
    pub has_cyber_risks: bool,
}

impl BusinessProfile {
    /// Labels for the boolean traits that are set.
    pub fn traits(&self) -> Vec<&'static str> {
        [
            (self.has_commercial_property, "Has Commercial Property"),
            (self.offers_professional_services, "Offers Professional Services"),
            (self.uses_vehicles, "Uses Vehicles"),
            (self.has_cyber_risks, "Has Cyber Risks"),
        ]
        .into_iter()
        .filter_map(|(set, label)| set.then_some(label))
        .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub relevance_scores: BTreeMap<String, f64>,
    /// Highest score first; ties keep catalog order.
    pub recommended_products: Vec<InsuranceProduct>,
    pub business_profile: BusinessProfile,
}

impl AssessmentResult {
    pub fn score_of(&self, product_id: &str) -> f64 {
        self.relevance_scores
            .get(product_id)
            .copied()
            .unwrap_or(0.0)
    }

    pub fn essential(&self) -> impl Iterator<Item = &InsuranceProduct> {
        self.recommended_products
            .iter()
            .filter(|product| product.is_essential())
    }

    pub fn additional(&self) -> impl Iterator<Item = &InsuranceProduct> {
        self.recommended_products
            .iter()
            .filter(|product| !product.is_essential())
    }

    pub fn recommended_ids(&self) -> Vec<&str> {
        self.recommended_products
            .iter()
            .map(|product| product.id.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn traits_lists_only_set_flags() {
        let profile = BusinessProfile {
            has_commercial_property: true,
            has_cyber_risks: true,
            ..BusinessProfile::default()
        };
        assert_eq!(
            profile.traits(),
            vec!["Has Commercial Property", "Has Cyber Risks"]
        );
        assert!(BusinessProfile::default().traits().is_empty());
    }
}
