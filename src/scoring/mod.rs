pub mod profile;

use crate::types::answer::{AnswerStore, AnswerValue};
use crate::types::assessment::AssessmentResult;
use crate::types::catalog::{Catalog, InsuranceProduct};
use crate::types::question::{AnswerKind, Question, QuestionSet};
use std::collections::BTreeMap;

/// Non-essential products need at least this score to be recommended.
pub const RECOMMEND_THRESHOLD: f64 = 4.0;

pub fn score(catalog: &Catalog, questions: &QuestionSet, answers: &AnswerStore) -> AssessmentResult {
    let relevance_scores = catalog
        .iter()
        .map(|product| (product.id.clone(), product_score(product, questions, answers)))
        .collect::<BTreeMap<_, _>>();

    let recommended_products = rank(catalog, &relevance_scores);
    let business_profile = profile::derive_profile(answers);

    tracing::debug!(
        answered = answers.len(),
        recommended = recommended_products.len(),
        "assessment scored"
    );

    AssessmentResult {
        relevance_scores,
        recommended_products,
        business_profile,
    }
}

// Folds from +0.0: an empty float `sum()` yields -0.0.
fn product_score(product: &InsuranceProduct, questions: &QuestionSet, answers: &AnswerStore) -> f64 {
    questions
        .iter()
        .filter_map(|question| {
            answers
                .get(&question.id)
                .map(|answer| contribution(question, answer, question.weight_for(&product.id)))
        })
        .fold(0.0, |total, share| total + share)
}

/// Share of `weight` earned by one answer to `question`.
pub fn contribution(question: &Question, answer: &AnswerValue, weight: f64) -> f64 {
    if weight == 0.0 {
        return 0.0;
    }
    let total = question.options.len();
    match (question.answer_kind, answer) {
        (AnswerKind::Boolean, AnswerValue::Boolean(value)) => {
            if *value {
                weight
            } else {
                0.0
            }
        }
        (AnswerKind::MultiChoice, AnswerValue::Selection(selected)) => {
            if total == 0 {
                return 0.0;
            }
            let count = selected
                .iter()
                .filter(|value| question.has_option(value))
                .count();
            weight * (count as f64 / total as f64)
        }
        (AnswerKind::SingleChoice | AnswerKind::Scale, AnswerValue::Choice(value)) => {
            // Option order encodes intensity: the last option earns the full weight.
            match question.option_index(value) {
                Some(index) => weight * ((index + 1) as f64 / total as f64),
                None => 0.0,
            }
        }
        _ => 0.0,
    }
}

fn rank(catalog: &Catalog, scores: &BTreeMap<String, f64>) -> Vec<InsuranceProduct> {
    let score_of = |product: &InsuranceProduct| scores.get(&product.id).copied().unwrap_or(0.0);
    let mut recommended = catalog
        .iter()
        .filter(|product| product.is_essential() || score_of(product) >= RECOMMEND_THRESHOLD)
        .cloned()
        .collect::<Vec<_>>();
    recommended.sort_by(|a, b| score_of(b).total_cmp(&score_of(a)));
    recommended
}
