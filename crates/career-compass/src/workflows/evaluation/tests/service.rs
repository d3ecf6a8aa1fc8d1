use serde_json::json;

use super::common::*;
use crate::workflows::evaluation::engine::SeniorityTier;
use crate::workflows::evaluation::normalize::{NormalizationError, SignalNormalizer};
use crate::workflows::evaluation::report::views::ScoreStatus;
use crate::workflows::evaluation::{EvaluationServiceError, NarrativeDraft};

#[test]
fn identical_submissions_produce_identical_bundles() {
    let service = service();
    let submission = submission_json();

    let first = service.evaluate(&submission).expect("first evaluation");
    let second = service.evaluate(&submission).expect("second evaluation");

    assert_eq!(
        serde_json::to_value(&first).expect("serializable"),
        serde_json::to_value(&second).expect("serializable")
    );
}

#[test]
fn bundles_compose_every_section() {
    let bundle = service()
        .evaluate(&submission_json())
        .expect("submission evaluates");

    assert!((97..=99).contains(&bundle.final_score));
    assert_eq!(bundle.score_status, ScoreStatus::Excellent);
    assert_eq!(bundle.score_status_label, "Excellent");
    assert_eq!(bundle.seniority.tier, SeniorityTier::Staff);
    assert!(!bundle.contradictions.flagged);
    assert!(bundle.normalization_notes.is_empty());

    assert_eq!(bundle.openings.len(), 6);
    assert!((3..=5).contains(&bundle.quick_wins.len()));
    assert_eq!(bundle.tools.len(), 8);
    assert_eq!(bundle.alternate_paths.len(), 2);
    assert_eq!(bundle.profile.key_stats.len(), 4);
    assert_eq!(bundle.narrative.strengths.len(), 5);
    assert_eq!(bundle.narrative.development_areas.len(), 3);
}

#[test]
fn evaluate_signals_matches_evaluate_for_clean_submissions() {
    let service = service();
    let submission = submission_json();
    let (signals, notes) = SignalNormalizer::default()
        .normalize(&submission)
        .expect("submission normalizes");

    let from_raw = service.evaluate(&submission).expect("raw evaluation");
    let from_signals = service.evaluate_signals(&signals, notes);

    assert_eq!(
        serde_json::to_value(&from_raw).expect("serializable"),
        serde_json::to_value(&from_signals).expect("serializable")
    );
}

#[test]
fn contradictory_submissions_flag_and_floor() {
    let bundle = service()
        .evaluate(&contradictory_submission_json())
        .expect("submission evaluates");

    assert_eq!(bundle.final_score, 46);
    assert_eq!(bundle.score_status, ScoreStatus::NeedsImprovement);
    assert_eq!(bundle.score_status_label, "Needs Improvement");
    assert!(bundle.contradictions.flagged);
    assert_eq!(bundle.quick_wins[0].priority, 100);
    assert!(!bundle.narrative.caveats.is_empty());
}

#[test]
fn structural_errors_propagate_from_the_normalizer() {
    match service().evaluate(&json!(42)) {
        Err(EvaluationServiceError::Normalization(NormalizationError::NotAnObject)) => {}
        other => panic!("expected structural rejection, got {other:?}"),
    }
}

#[test]
fn narrative_review_round_trips_through_the_service() {
    let service = service();
    let draft = NarrativeDraft {
        stated_score: Some(90),
        stated_tier: Some(SeniorityTier::Staff),
        stated_percentages: Vec::new(),
    };

    let review = service
        .review_narrative(&submission_json(), &draft)
        .expect("review runs");

    assert!(review.accepted);
    assert!(review.breaches.is_empty());
}
