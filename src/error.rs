use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoverScoutError {
    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("reference data parse error: {0}")]
    DataParse(String),

    #[error("invalid reference data: {0}")]
    InvalidReferenceData(String),

    #[error("answer for '{question}' has kind {found}, expected {expected}")]
    AnswerKindMismatch {
        question: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("unknown question: {0}")]
    UnknownQuestion(String),

    #[error("question '{0}' must be answered before continuing")]
    UnansweredQuestion(String),

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("telemetry error: {0}")]
    Telemetry(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CoverScoutError>;
