//! Assessment session as an explicit value. Transitions take the current
//! state by reference and return the next one.

use crate::data::ReferenceData;
use crate::error::{CoverScoutError, Result};
use crate::scoring;
use crate::types::answer::{AnswerStore, AnswerValue};
use crate::types::assessment::AssessmentResult;
use crate::types::question::Question;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SessionState {
    InProgress {
        question_index: usize,
        answers: AnswerStore,
    },
    Complete {
        result: AssessmentResult,
    },
}

impl Default for SessionState {
    fn default() -> Self {
        Self::InProgress {
            question_index: 0,
            answers: AnswerStore::new(),
        }
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete { .. })
    }

    pub fn result(&self) -> Option<&AssessmentResult> {
        match self {
            Self::Complete { result } => Some(result),
            Self::InProgress { .. } => None,
        }
    }

    pub fn question_index(&self) -> Option<usize> {
        match self {
            Self::InProgress { question_index, .. } => Some(*question_index),
            Self::Complete { .. } => None,
        }
    }

    pub fn answers(&self) -> Option<&AnswerStore> {
        match self {
            Self::InProgress { answers, .. } => Some(answers),
            Self::Complete { .. } => None,
        }
    }

    pub fn current_question<'a>(&self, data: &'a ReferenceData) -> Option<&'a Question> {
        self.question_index()
            .and_then(|index| data.questions.at(index))
    }

    pub fn current_answer(&self, data: &ReferenceData) -> Option<&AnswerValue> {
        let question = self.current_question(data)?;
        self.answers()?.get(&question.id)
    }

    /// Presentation-side gate: fails when the current question has no answer.
    pub fn ensure_answered(&self, data: &ReferenceData) -> Result<()> {
        match self.current_question(data) {
            Some(question) if self.current_answer(data).is_none() => {
                Err(CoverScoutError::UnansweredQuestion(question.id.clone()))
            }
            _ => Ok(()),
        }
    }

    /// Records `value` for the question at the current index. A completed
    /// session is returned unchanged.
    pub fn answer_current(&self, data: &ReferenceData, value: AnswerValue) -> Result<Self> {
        let Self::InProgress {
            question_index,
            answers,
        } = self
        else {
            return Ok(self.clone());
        };
        let question = data
            .questions
            .at(*question_index)
            .ok_or_else(|| CoverScoutError::UnknownQuestion(format!("#{}", question_index + 1)))?;
        let mut answers = answers.clone();
        answers.record(question, value)?;
        Ok(Self::InProgress {
            question_index: *question_index,
            answers,
        })
    }

    /// Moves to the next question, or scores the answers when already on the
    /// last one. Answer presence is the caller's gate.
    pub fn advance(&self, data: &ReferenceData) -> Self {
        let Self::InProgress {
            question_index,
            answers,
        } = self
        else {
            return self.clone();
        };
        if question_index + 1 < data.questions.len() {
            tracing::debug!(from = question_index, "advancing to next question");
            return Self::InProgress {
                question_index: question_index + 1,
                answers: answers.clone(),
            };
        }
        let result = scoring::score(&data.catalog, &data.questions, answers);
        tracing::info!(
            recommended = result.recommended_products.len(),
            "assessment complete"
        );
        Self::Complete { result }
    }

    /// Steps back one question; a no-op on the first question or once complete.
    pub fn retreat(&self) -> Self {
        match self {
            Self::InProgress {
                question_index,
                answers,
            } if *question_index > 0 => Self::InProgress {
                question_index: question_index - 1,
                answers: answers.clone(),
            },
            _ => self.clone(),
        }
    }

    pub fn restart(&self) -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer_for(question: &Question) -> AnswerValue {
        match question.answer_kind {
            crate::types::question::AnswerKind::Boolean => AnswerValue::Boolean(true),
            crate::types::question::AnswerKind::MultiChoice => {
                AnswerValue::selection(question.options.iter().take(1).cloned())
            }
            _ => AnswerValue::choice(question.options.last().cloned().unwrap_or_default()),
        }
    }

    fn run_to_completion(data: &ReferenceData, mut state: SessionState) -> SessionState {
        while !state.is_complete() {
            let question = state.current_question(data).expect("question in range");
            state = state
                .answer_current(data, answer_for(question))
                .expect("answer should fit")
                .advance(data);
        }
        state
    }

    #[test]
    fn new_session_starts_at_first_question_without_answers() {
        let state = SessionState::new();
        assert_eq!(state.question_index(), Some(0));
        assert!(state.answers().is_some_and(AnswerStore::is_empty));
        assert!(state.result().is_none());
    }

    #[test]
    fn advance_moves_forward_then_completes_on_last_question() {
        let data = ReferenceData::shipped();
        let mut state = SessionState::new();
        for expected in 1..data.questions.len() {
            state = state.advance(&data);
            assert_eq!(state.question_index(), Some(expected));
        }
        let done = state.advance(&data);
        let result = done.result().expect("session should be complete");
        // Nothing was answered, so only the essential tier is listed.
        assert_eq!(result.recommended_ids(), vec!["gl", "property", "workers"]);
    }

    #[test]
    fn retreat_is_noop_on_first_question() {
        let data = ReferenceData::shipped();
        let state = SessionState::new();
        assert_eq!(state.retreat(), state);

        let moved = state.advance(&data).advance(&data).retreat();
        assert_eq!(moved.question_index(), Some(1));
    }

    #[test]
    fn answer_current_keeps_answers_across_navigation() {
        let data = ReferenceData::shipped();
        let state = SessionState::new()
            .answer_current(&data, AnswerValue::choice("Retail"))
            .expect("industry answer should fit")
            .advance(&data)
            .retreat();
        assert_eq!(
            state.current_answer(&data),
            Some(&AnswerValue::choice("Retail"))
        );
    }

    #[test]
    fn answer_current_rejects_wrong_kind_without_changing_state() {
        let data = ReferenceData::shipped();
        let state = SessionState::new();
        let err = state
            .answer_current(&data, AnswerValue::Boolean(true))
            .expect_err("boolean for single-choice should fail");
        assert!(matches!(err, CoverScoutError::AnswerKindMismatch { .. }));
        assert_eq!(state, SessionState::new());
    }

    #[test]
    fn ensure_answered_reports_current_question() {
        let data = ReferenceData::shipped();
        let state = SessionState::new();
        assert!(matches!(
            state.ensure_answered(&data),
            Err(CoverScoutError::UnansweredQuestion(id)) if id == "industry"
        ));
        let answered = state
            .answer_current(&data, AnswerValue::choice("Retail"))
            .expect("answer should fit");
        assert!(answered.ensure_answered(&data).is_ok());
    }

    #[test]
    fn completed_session_ignores_navigation_and_answers() {
        let data = ReferenceData::shipped();
        let done = run_to_completion(&data, SessionState::new());
        assert_eq!(done.advance(&data), done);
        assert_eq!(done.retreat(), done);
        assert_eq!(
            done.answer_current(&data, AnswerValue::Boolean(true))
                .expect("complete session accepts no-op"),
            done
        );
    }

    #[test]
    fn restart_returns_initial_state_and_replays_identically() {
        let data = ReferenceData::shipped();
        let first = run_to_completion(&data, SessionState::new());
        let restarted = first.restart();
        assert_eq!(restarted, SessionState::new());

        let second = run_to_completion(&data, restarted);
        assert_eq!(first.result(), second.result());
    }

    #[test]
    fn restart_mid_session_discards_answers() {
        let data = ReferenceData::shipped();
        let state = SessionState::new()
            .answer_current(&data, AnswerValue::choice("Retail"))
            .expect("answer should fit")
            .advance(&data)
            .restart();
        assert_eq!(state, SessionState::new());
    }

    #[test]
    fn state_serializes_with_tag() {
        let json = serde_json::to_string(&SessionState::new()).expect("state should serialize");
        assert!(json.contains("\"state\":\"in_progress\""));
        let back: SessionState = serde_json::from_str(&json).expect("state should deserialize");
        assert_eq!(back, SessionState::new());
    }

    #[test]
    fn empty_question_set_completes_immediately() {
        let data = ReferenceData {
            catalog: crate::data::catalog(),
            questions: Default::default(),
        };
        assert!(SessionState::new().advance(&data).is_complete());
    }
}
