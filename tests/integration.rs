// Library-level checks of the scoring contract against the shipped data.

use coverscout::{
    score, AnswerStore, AnswerValue, Importance, ReferenceData, SessionState,
    RECOMMEND_THRESHOLD,
};

fn answers(data: &ReferenceData, entries: &[(&str, AnswerValue)]) -> AnswerStore {
    let mut store = AnswerStore::new();
    for (id, value) in entries {
        let question = data.questions.get(id).expect("shipped question");
        store
            .record(question, value.clone())
            .expect("answer should fit");
    }
    store
}

fn sample_answer_sets(data: &ReferenceData) -> Vec<AnswerStore> {
    vec![
        AnswerStore::new(),
        answers(
            data,
            &[
                ("property", AnswerValue::Boolean(true)),
                ("services", AnswerValue::Boolean(true)),
                ("data", AnswerValue::Boolean(true)),
                ("employees", AnswerValue::choice("6-25 employees")),
            ],
        ),
        answers(
            data,
            &[
                ("industry", AnswerValue::choice("Construction")),
                ("vehicles", AnswerValue::Boolean(true)),
                ("value", AnswerValue::choice("Over $1 million")),
                ("customers", AnswerValue::choice("Constant")),
            ],
        ),
        answers(
            data,
            &[
                ("industry", AnswerValue::choice("Discontinued industry")),
                ("property", AnswerValue::Boolean(false)),
            ],
        ),
    ]
}

#[test]
fn essential_products_are_always_recommended() {
    let data = ReferenceData::shipped();
    for store in sample_answer_sets(&data) {
        let result = score(&data.catalog, &data.questions, &store);
        for product in data.catalog.iter().filter(|p| p.importance == Importance::Essential) {
            assert!(result.recommended_ids().contains(&product.id.as_str()));
        }
    }
}

#[test]
fn non_essential_products_follow_threshold() {
    let data = ReferenceData::shipped();
    for store in sample_answer_sets(&data) {
        let result = score(&data.catalog, &data.questions, &store);
        for product in data.catalog.iter().filter(|p| !p.is_essential()) {
            let listed = result.recommended_ids().contains(&product.id.as_str());
            assert_eq!(listed, result.score_of(&product.id) >= RECOMMEND_THRESHOLD);
        }
    }
}

#[test]
fn recommendations_are_sorted_by_score_with_stable_ties() {
    let data = ReferenceData::shipped();
    let catalog_position = |id: &str| {
        data.catalog
            .iter()
            .position(|product| product.id == id)
            .expect("recommended product is in catalog")
    };
    for store in sample_answer_sets(&data) {
        let result = score(&data.catalog, &data.questions, &store);
        for pair in result.recommended_products.windows(2) {
            let (a, b) = (result.score_of(&pair[0].id), result.score_of(&pair[1].id));
            assert!(a >= b);
            if a == b {
                assert!(catalog_position(&pair[0].id) < catalog_position(&pair[1].id));
            }
        }
    }
}

#[test]
fn stale_answer_scores_like_no_answer() {
    let data = ReferenceData::shipped();
    let stale = answers(
        &data,
        &[("industry", AnswerValue::choice("Discontinued industry"))],
    );
    let result = score(&data.catalog, &data.questions, &stale);
    assert!(result.relevance_scores.values().all(|score| *score == 0.0));
    assert_eq!(result.business_profile.industry.as_deref(), Some("Discontinued industry"));
}

#[test]
fn session_walkthrough_matches_direct_scoring() {
    let data = ReferenceData::shipped();
    let picks = [
        AnswerValue::choice("Retail"),
        AnswerValue::choice("26-100 employees"),
        AnswerValue::Boolean(true),
        AnswerValue::Boolean(false),
        AnswerValue::Boolean(true),
        AnswerValue::Boolean(false),
        AnswerValue::choice("$250,000 - $1 million"),
        AnswerValue::choice("Significant"),
    ];

    let mut state = SessionState::new();
    for pick in &picks {
        state = state
            .answer_current(&data, pick.clone())
            .expect("answer should fit")
            .advance(&data);
    }
    let from_session = state.result().expect("session should complete").clone();

    let direct = answers(
        &data,
        &data
            .questions
            .iter()
            .map(|question| question.id.as_str())
            .zip(picks.iter().cloned())
            .collect::<Vec<_>>(),
    );
    assert_eq!(from_session, score(&data.catalog, &data.questions, &direct));
    assert!(from_session.business_profile.uses_vehicles);
}
