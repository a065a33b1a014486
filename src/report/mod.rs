pub mod export;
pub mod json;
pub mod md;
pub mod share;

use crate::data::{BusinessSize, Industry};
use crate::error::{CoverScoutError, Result};
use crate::types::assessment::AssessmentResult;
use crate::types::catalog::Catalog;
use crate::types::question::QuestionSet;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Md,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Md => "md",
        }
    }

    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "json" => Ok(Self::Json),
            "md" => Ok(Self::Md),
            other => Err(CoverScoutError::ConfigParse(format!(
                "unsupported report.format: {other}"
            ))),
        }
    }
}

/// Rendered view of one assessment.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentReport<'a> {
    pub tool_version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share_code: Option<String>,
    #[serde(flatten)]
    pub result: &'a AssessmentResult,
}

impl<'a> AssessmentReport<'a> {
    pub fn new(result: &'a AssessmentResult) -> Self {
        Self {
            tool_version: env!("CARGO_PKG_VERSION"),
            share_code: None,
            result,
        }
    }

    pub fn with_share_code(mut self, code: String) -> Self {
        self.share_code = Some(code);
        self
    }
}

pub fn render(report: &AssessmentReport<'_>, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(CoverScoutError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}

pub fn render_questions(questions: &QuestionSet, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::to_json(questions).map_err(CoverScoutError::Json),
        OutputFormat::Md => Ok(md::questions_markdown(questions)),
    }
}

pub fn render_catalog(catalog: &Catalog, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::to_json(catalog).map_err(CoverScoutError::Json),
        OutputFormat::Md => Ok(md::catalog_markdown(catalog)),
    }
}

/// Shipped industries with their business sub-types, and the size bands
/// behind the `employees` options.
#[derive(Debug, Clone, Serialize)]
pub struct BusinessTypes {
    pub industries: Vec<Industry>,
    pub business_sizes: Vec<BusinessSize>,
}

impl BusinessTypes {
    pub fn shipped() -> Self {
        Self {
            industries: crate::data::industries(),
            business_sizes: crate::data::business_sizes(),
        }
    }
}

pub fn render_business_types(types: &BusinessTypes, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::to_json(types).map_err(CoverScoutError::Json),
        OutputFormat::Md => Ok(md::business_types_markdown(types)),
    }
}
