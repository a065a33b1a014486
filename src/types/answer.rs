use crate::error::{CoverScoutError, Result};
use crate::types::question::{AnswerKind, Question, QuestionSet};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Answer payload, tagged by the shape the owning question expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Boolean(bool),
    /// Single-choice and scale answers.
    Choice(String),
    /// Multi-choice answers.
    Selection(BTreeSet<String>),
}

impl AnswerValue {
    pub fn choice(value: impl Into<String>) -> Self {
        Self::Choice(value.into())
    }

    pub fn selection<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Selection(values.into_iter().map(Into::into).collect())
    }

    pub fn shape(&self) -> &'static str {
        match self {
            Self::Boolean(_) => "boolean",
            Self::Choice(_) => "choice",
            Self::Selection(_) => "selection",
        }
    }

    pub fn fits(&self, kind: AnswerKind) -> bool {
        matches!(
            (self, kind),
            (Self::Boolean(_), AnswerKind::Boolean)
                | (Self::Choice(_), AnswerKind::SingleChoice | AnswerKind::Scale)
                | (Self::Selection(_), AnswerKind::MultiChoice)
        )
    }

    pub fn is_true(&self) -> bool {
        matches!(self, Self::Boolean(true))
    }

    pub fn as_choice(&self) -> Option<&str> {
        match self {
            Self::Choice(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean(true) => write!(f, "yes"),
            Self::Boolean(false) => write!(f, "no"),
            Self::Choice(value) => write!(f, "{value}"),
            Self::Selection(values) => {
                let joined = values.iter().cloned().collect::<Vec<_>>().join(", ");
                write!(f, "{joined}")
            }
        }
    }
}

/// Non-fatal problems found in a set of answers. Scoring ignores both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerWarning {
    UnknownQuestion(String),
    StaleOption { question: String, value: String },
}

impl fmt::Display for AnswerWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownQuestion(id) => write!(f, "answer for unknown question '{id}' ignored"),
            Self::StaleOption { question, value } => write!(
                f,
                "answer '{value}' is not an option of '{question}' and contributes nothing"
            ),
        }
    }
}

#[derive(Debug, Deserialize)]
struct AnswerFile {
    #[serde(default)]
    answers: BTreeMap<String, AnswerValue>,
}

/// Question id -> answer for one assessment session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerStore {
    entries: BTreeMap<String, AnswerValue>,
}

impl AnswerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites the answer for `question`. Option membership is
    /// not checked; a stale value simply scores zero.
    pub fn record(&mut self, question: &Question, value: AnswerValue) -> Result<()> {
        if !value.fits(question.answer_kind) {
            return Err(CoverScoutError::AnswerKindMismatch {
                question: question.id.clone(),
                expected: question.answer_kind.as_str(),
                found: value.shape(),
            });
        }
        self.entries.insert(question.id.clone(), value);
        Ok(())
    }

    pub fn get(&self, question_id: &str) -> Option<&AnswerValue> {
        self.entries.get(question_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parses an `[answers]` TOML table against `questions`.
    pub fn from_toml_str(
        content: &str,
        questions: &QuestionSet,
    ) -> Result<(Self, Vec<AnswerWarning>)> {
        let file: AnswerFile = toml::from_str(content)?;
        let mut store = Self::new();
        let mut warnings = Vec::new();
        for (id, value) in file.answers {
            match questions.get(&id) {
                Some(question) => store.record(question, value)?,
                None => {
                    tracing::warn!(question = %id, "skipping answer for unknown question");
                    warnings.push(AnswerWarning::UnknownQuestion(id));
                }
            }
        }
        warnings.extend(store.audit(questions));
        Ok((store, warnings))
    }

    /// Lists stored values that are not in their question's option list.
    pub fn audit(&self, questions: &QuestionSet) -> Vec<AnswerWarning> {
        let mut warnings = Vec::new();
        for (id, value) in &self.entries {
            let Some(question) = questions.get(id) else {
                warnings.push(AnswerWarning::UnknownQuestion(id.clone()));
                continue;
            };
            let stale: Vec<&String> = match value {
                AnswerValue::Boolean(_) => vec![],
                AnswerValue::Choice(choice) => {
                    if question.has_option(choice) {
                        vec![]
                    } else {
                        vec![choice]
                    }
                }
                AnswerValue::Selection(selected) => selected
                    .iter()
                    .filter(|choice| !question.has_option(choice))
                    .collect(),
            };
            warnings.extend(stale.into_iter().map(|value| AnswerWarning::StaleOption {
                question: id.clone(),
                value: value.clone(),
            }));
        }
        warnings
    }
}
