use crate::error::{CoverScoutError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnswerKind {
    SingleChoice,
    MultiChoice,
    Boolean,
    Scale,
}

impl AnswerKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SingleChoice => "single-choice",
            Self::MultiChoice => "multi-choice",
            Self::Boolean => "boolean",
            Self::Scale => "scale",
        }
    }

    pub fn has_options(self) -> bool {
        !matches!(self, Self::Boolean)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
    pub answer_kind: AnswerKind,
    /// Ordered low intensity -> high intensity for single-choice and scale.
    #[serde(default)]
    pub options: Vec<String>,
    /// Product id -> weight. Absent entries mean zero.
    #[serde(default)]
    pub relevance_weights: BTreeMap<String, f64>,
}

impl Question {
    pub fn weight_for(&self, product_id: &str) -> f64 {
        self.relevance_weights
            .get(product_id)
            .copied()
            .unwrap_or(0.0)
    }

    pub fn option_index(&self, value: &str) -> Option<usize> {
        self.options.iter().position(|option| option == value)
    }

    pub fn has_option(&self, value: &str) -> bool {
        self.option_index(value).is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestionSet {
    pub questions: Vec<Question>,
}

impl QuestionSet {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn get(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|question| question.id == id)
    }

    pub fn at(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for question in &self.questions {
            let id = question.id.trim();
            if id.is_empty() {
                return Err(CoverScoutError::InvalidReferenceData(
                    "question ids must be non-empty".to_string(),
                ));
            }
            if !seen.insert(id) {
                return Err(CoverScoutError::InvalidReferenceData(format!(
                    "duplicate question id: {id}"
                )));
            }
            if question.answer_kind.has_options() && question.options.is_empty() {
                return Err(CoverScoutError::InvalidReferenceData(format!(
                    "question '{id}' is {} but declares no options",
                    question.answer_kind.as_str()
                )));
            }
            let mut options = HashSet::new();
            if let Some(duplicate) = question
                .options
                .iter()
                .find(|option| !options.insert(option.as_str()))
            {
                return Err(CoverScoutError::InvalidReferenceData(format!(
                    "question '{id}' lists option '{duplicate}' more than once"
                )));
            }
            if let Some((product, weight)) = question
                .relevance_weights
                .iter()
                .find(|(_, weight)| !weight.is_finite() || **weight < 0.0)
            {
                return Err(CoverScoutError::InvalidReferenceData(format!(
                    "question '{id}' has invalid weight {weight} for product '{product}'"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scale() -> Question {
        Question {
            id: "customers".to_string(),
            prompt: "How much customer contact?".to_string(),
            help_text: None,
            answer_kind: AnswerKind::Scale,
            options: vec!["None".to_string(), "Some".to_string(), "Lots".to_string()],
            relevance_weights: BTreeMap::from([("gl".to_string(), 5.0)]),
        }
    }

    #[test]
    fn option_index_follows_declared_order() {
        let question = scale();
        assert_eq!(question.option_index("None"), Some(0));
        assert_eq!(question.option_index("Lots"), Some(2));
        assert_eq!(question.option_index("Unknown"), None);
    }

    #[test]
    fn validate_rejects_choice_question_without_options() {
        let mut question = scale();
        question.options.clear();
        let err = QuestionSet::new(vec![question])
            .validate()
            .expect_err("empty options should fail");
        assert!(err.to_string().contains("declares no options"));
    }

    #[test]
    fn validate_accepts_boolean_question_without_options() {
        let question = Question {
            id: "vehicles".to_string(),
            prompt: "Vehicles?".to_string(),
            help_text: None,
            answer_kind: AnswerKind::Boolean,
            options: vec![],
            relevance_weights: BTreeMap::new(),
        };
        assert!(QuestionSet::new(vec![question, scale()]).validate().is_ok());
    }

    #[test]
    fn validate_rejects_duplicate_question_ids_and_options() {
        let err = QuestionSet::new(vec![scale(), scale()])
            .validate()
            .expect_err("duplicate ids should fail");
        assert!(err.to_string().contains("duplicate question id"));

        let mut question = scale();
        question.options.push("None".to_string());
        let err = QuestionSet::new(vec![question])
            .validate()
            .expect_err("duplicate options should fail");
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn answer_kind_parses_kebab_case() {
        let parsed: Question = toml::from_str(
            r#"
id = "coverage"
prompt = "Which coverages do you hold?"
answer_kind = "multi-choice"
options = ["a", "b"]
"#,
        )
        .expect("question should parse");
        assert_eq!(parsed.answer_kind, AnswerKind::MultiChoice);
        assert_eq!(parsed.weight_for("gl"), 0.0);
    }
}
