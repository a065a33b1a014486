use crate::types::catalog::{Catalog, Importance, InsuranceProduct, Segment};
use std::collections::BTreeMap;

fn product(
    id: &str,
    name: &str,
    description: &str,
    importance: Importance,
    coverage_details: &[&str],
    relevant_for: Vec<Segment>,
) -> InsuranceProduct {
    InsuranceProduct {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        importance,
        coverage_details: coverage_details.iter().map(|detail| detail.to_string()).collect(),
        relevant_for,
        relevance_weights: BTreeMap::new(),
    }
}

/// Shipped products without weights; `data::catalog` links them.
pub(crate) fn products() -> Catalog {
    Catalog::new(vec![
        product(
            "gl",
            "General Liability",
            "Protects against financial loss as a result of bodily injury, property damage, medical expenses, and defense of lawsuits.",
            Importance::Essential,
            &[
                "Bodily injury and property damage",
                "Personal and advertising injury",
                "Medical payments",
                "Legal defense costs",
            ],
            vec![Segment::new(
                "all",
                "All Businesses",
                "Any business with physical premises or client interaction",
            )],
        ),
        product(
            "pl",
            "Professional Liability",
            "Also known as Errors & Omissions (E&O) insurance, it protects service-based businesses against claims of negligence or failure to perform professional duties.",
            Importance::Recommended,
            &[
                "Negligence claims",
                "Defense costs",
                "Actual or alleged errors",
                "Incomplete work claims",
            ],
            vec![
                Segment::new("consultant", "Consultants", "Businesses providing advice or services"),
                Segment::new("tech", "Technology Companies", "Software developers and IT service providers"),
                Segment::new("accounting", "Accounting Firms", "Businesses providing financial advice or services"),
            ],
        ),
        product(
            "property",
            "Commercial Property",
            "Covers buildings, inventory, furniture, equipment, and other physical assets against damage or loss from covered perils.",
            Importance::Essential,
            &[
                "Building coverage",
                "Business personal property",
                "Business interruption",
                "Equipment breakdown",
            ],
            vec![
                Segment::new("retail", "Retail", "Businesses with physical storefronts"),
                Segment::new("manufacturing", "Manufacturing", "Businesses producing physical goods"),
                Segment::new("restaurant", "Restaurants", "Food service businesses"),
            ],
        ),
        product(
            "workers",
            "Workers' Compensation",
            "Provides benefits to employees who suffer work-related injuries or illnesses, including medical care and replacement income.",
            Importance::Essential,
            &[
                "Medical expenses",
                "Lost wages",
                "Rehabilitation costs",
                "Death benefits",
            ],
            vec![Segment::new(
                "employees",
                "Businesses with Employees",
                "Required by law in most states for businesses with employees",
            )],
        ),
        product(
            "cyber",
            "Cyber Liability",
            "Protects against damages from data breaches, hacking, ransomware, and other cyber incidents.",
            Importance::Recommended,
            &[
                "Data breach response",
                "Customer notification costs",
                "Cyber extortion",
                "Business interruption from cyber events",
            ],
            vec![
                Segment::new("tech", "Technology Companies", "Software developers and IT service providers"),
                Segment::new("data", "Data-Driven Businesses", "Businesses handling sensitive customer information"),
            ],
        ),
        product(
            "commercial-auto",
            "Commercial Auto",
            "Covers vehicles used for business purposes, protecting against liability and physical damage.",
            Importance::Recommended,
            &[
                "Liability coverage",
                "Physical damage to vehicles",
                "Medical payments",
                "Uninsured motorist protection",
            ],
            vec![
                Segment::new("transport", "Transportation Services", "Businesses using vehicles for service delivery"),
                Segment::new("delivery", "Delivery Services", "Businesses delivering products to customers"),
            ],
        ),
        product(
            "bop",
            "Business Owner's Policy (BOP)",
            "Combines general liability and commercial property into a bundled package, often at a reduced premium.",
            Importance::Recommended,
            &[
                "General liability protection",
                "Property insurance",
                "Business interruption coverage",
                "Often customizable with additional endorsements",
            ],
            vec![Segment::new(
                "small",
                "Small Businesses",
                "Ideal for small to medium-sized businesses with physical locations",
            )],
        ),
        product(
            "umbrella",
            "Commercial Umbrella",
            "Provides additional liability coverage that goes beyond the limits of your existing policies.",
            Importance::Optional,
            &[
                "Extended liability protection",
                "Coverage when primary policies reach their limits",
                "Additional peace of mind for high-risk businesses",
            ],
            vec![
                Segment::new("high-risk", "High-Risk Businesses", "Businesses with significant liability exposure"),
                Segment::new("high-value", "High-Value Businesses", "Businesses with substantial assets to protect"),
            ],
        ),
    ])
}
