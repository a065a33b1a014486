use crate::types::question::{AnswerKind, Question, QuestionSet};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusinessKind {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Industry {
    pub id: &'static str,
    pub name: &'static str,
    pub businesses: Vec<BusinessKind>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusinessSize {
    pub id: &'static str,
    pub name: &'static str,
    pub employee_range: &'static str,
    pub revenue_range: Option<&'static str>,
}

fn kind(id: &'static str, name: &'static str, description: &'static str) -> BusinessKind {
    BusinessKind {
        id,
        name,
        description,
    }
}

pub fn industries() -> Vec<Industry> {
    vec![
        Industry {
            id: "retail",
            name: "Retail",
            businesses: vec![
                kind("storefront", "Storefront Retail", "Physical retail locations"),
                kind("ecommerce", "E-commerce", "Online retail businesses"),
            ],
        },
        Industry {
            id: "service",
            name: "Service",
            businesses: vec![
                kind("consulting", "Consulting", "Business consulting services"),
                kind("professional", "Professional Services", "Legal, accounting, etc."),
                kind("personal", "Personal Services", "Hair salon, spa, etc."),
            ],
        },
        Industry {
            id: "hospitality",
            name: "Hospitality",
            businesses: vec![
                kind("restaurant", "Restaurant", "Food service establishments"),
                kind("cafe", "Café/Bakery", "Coffee shops and bakeries"),
            ],
        },
        Industry {
            id: "technology",
            name: "Technology",
            businesses: vec![
                kind("software", "Software Development", "Creating software products"),
                kind("it-services", "IT Services", "IT support and services"),
            ],
        },
        Industry {
            id: "construction",
            name: "Construction",
            businesses: vec![
                kind("general", "General Contractor", "General building contractors"),
                kind("specialized", "Specialized Trade", "Electrical, plumbing, etc."),
            ],
        },
        Industry {
            id: "healthcare",
            name: "Healthcare",
            businesses: vec![
                kind("medical", "Medical Practice", "Doctor offices and clinics"),
                kind("therapy", "Therapy & Wellness", "Physical therapy, wellness centers"),
            ],
        },
    ]
}

pub fn business_sizes() -> Vec<BusinessSize> {
    vec![
        BusinessSize {
            id: "micro",
            name: "Micro",
            employee_range: "1-5 employees",
            revenue_range: Some("Up to $500,000"),
        },
        BusinessSize {
            id: "small",
            name: "Small",
            employee_range: "6-25 employees",
            revenue_range: Some("$500,000 - $2 million"),
        },
        BusinessSize {
            id: "medium",
            name: "Medium",
            employee_range: "26-100 employees",
            revenue_range: Some("$2 million - $10 million"),
        },
        BusinessSize {
            id: "large",
            name: "Large Small Business",
            employee_range: "101-500 employees",
            revenue_range: Some("$10 million - $50 million"),
        },
    ]
}

// Weight columns, in this order, for every shipped question.
const PRODUCT_ORDER: [&str; 8] = [
    "gl",
    "pl",
    "property",
    "workers",
    "cyber",
    "commercial-auto",
    "bop",
    "umbrella",
];

fn question(
    id: &str,
    prompt: &str,
    help_text: Option<&str>,
    answer_kind: AnswerKind,
    options: Vec<String>,
    weights: [f64; 8],
) -> Question {
    Question {
        id: id.to_string(),
        prompt: prompt.to_string(),
        help_text: help_text.map(str::to_string),
        answer_kind,
        options,
        relevance_weights: PRODUCT_ORDER
            .iter()
            .zip(weights)
            .filter(|(_, weight)| *weight > 0.0)
            .map(|(product, weight)| (product.to_string(), weight))
            .collect(),
    }
}

fn owned(options: &[&str]) -> Vec<String> {
    options.iter().map(|option| option.to_string()).collect()
}

pub fn question_set() -> QuestionSet {
    QuestionSet::new(vec![
        question(
            "industry",
            "Which industry does your business operate in?",
            None,
            AnswerKind::SingleChoice,
            industries()
                .iter()
                .map(|industry| industry.name.to_string())
                .collect(),
            [2.0, 3.0, 2.0, 1.0, 1.0, 1.0, 2.0, 1.0],
        ),
        question(
            "employees",
            "How many employees does your business have?",
            None,
            AnswerKind::SingleChoice,
            business_sizes()
                .iter()
                .map(|size| size.employee_range.to_string())
                .collect(),
            [1.0, 1.0, 1.0, 5.0, 1.0, 1.0, 2.0, 2.0],
        ),
        question(
            "property",
            "Does your business own or lease commercial property?",
            Some("This includes office space, retail locations, or manufacturing facilities"),
            AnswerKind::Boolean,
            vec![],
            [3.0, 0.0, 5.0, 0.0, 0.0, 0.0, 4.0, 1.0],
        ),
        question(
            "services",
            "Does your business provide professional advice or services?",
            Some("For example: consulting, design, accounting, legal, or technical services"),
            AnswerKind::Boolean,
            vec![],
            [2.0, 5.0, 0.0, 0.0, 2.0, 0.0, 1.0, 2.0],
        ),
        question(
            "vehicles",
            "Does your business use vehicles for operations?",
            Some("This includes company-owned vehicles or employee vehicles used for business purposes"),
            AnswerKind::Boolean,
            vec![],
            [0.0, 0.0, 0.0, 0.0, 0.0, 5.0, 0.0, 2.0],
        ),
        question(
            "data",
            "Does your business store sensitive customer or financial data?",
            None,
            AnswerKind::Boolean,
            vec![],
            [0.0, 1.0, 0.0, 0.0, 5.0, 0.0, 0.0, 1.0],
        ),
        question(
            "value",
            "What is the approximate value of your business assets?",
            None,
            AnswerKind::SingleChoice,
            owned(&[
                "Under $50,000",
                "$50,000 - $250,000",
                "$250,000 - $1 million",
                "Over $1 million",
            ]),
            [2.0, 1.0, 4.0, 0.0, 2.0, 1.0, 3.0, 4.0],
        ),
        question(
            "customers",
            "How much direct interaction do you have with customers or clients at your business location?",
            None,
            AnswerKind::Scale,
            owned(&["None", "Minimal", "Moderate", "Significant", "Constant"]),
            [5.0, 2.0, 1.0, 0.0, 0.0, 0.0, 3.0, 2.0],
        ),
    ])
}
