pub mod config;
pub mod data;
pub mod error;
pub mod quiz;
pub mod report;
pub mod scoring;
pub mod session;
pub mod telemetry;
pub mod types;

pub use data::ReferenceData;
pub use error::{CoverScoutError, Result};
pub use scoring::{score, RECOMMEND_THRESHOLD};
pub use session::SessionState;
pub use types::answer::{AnswerStore, AnswerValue};
pub use types::assessment::{AssessmentResult, BusinessProfile};
pub use types::catalog::{Catalog, Importance, InsuranceProduct};
pub use types::question::{AnswerKind, Question, QuestionSet};
