//! Integration coverage for cohort CSV imports.
//!
//! Each row of a questionnaire export is rebuilt into a submission and run
//! through the same evaluation pipeline the HTTP surface uses, so these
//! scenarios double as a consistency check between batch and single-shot
//! evaluation.

use career_compass::workflows::cohort::{CohortImportError, CohortReview};
use career_compass::workflows::evaluation::{EvaluationService, ScoringConfig, SeniorityTier};
use chrono::NaiveDate;
use serde_json::json;

fn service() -> EvaluationService {
    EvaluationService::new(ScoringConfig::standard())
}

#[test]
fn import_evaluates_rows_in_submission_order() {
    let csv = "Candidate,Submitted At,Experience,Current Role,Problem Solving,System Design,Portfolio,Target Role,Target Company\n\
Priya Raman,2026-03-02T10:15:00Z,8+,swe-product,100+,multiple,active-5+,senior-backend,faang\n\
Noah Brandt,2026-03-05,0-2,career-switcher,0-10,led-multiple,none,tech-lead,faang\n";

    let review = CohortReview::from_reader(csv.as_bytes(), &service()).expect("import succeeds");

    assert_eq!(review.entries.len(), 2);

    let priya = &review.entries[0];
    assert_eq!(priya.candidate, "Priya Raman");
    assert_eq!(priya.submitted_on, NaiveDate::from_ymd_opt(2026, 3, 2));
    assert_eq!(priya.tier, SeniorityTier::Staff);
    assert_eq!(priya.flags, 0);
    assert!((97..=99).contains(&priya.final_score));

    let noah = &review.entries[1];
    assert_eq!(noah.candidate, "Noah Brandt");
    assert_eq!(noah.submitted_on, NaiveDate::from_ymd_opt(2026, 3, 5));
    assert_eq!(noah.tier, SeniorityTier::Entry);
    assert_eq!(noah.flags, 2);
    assert_eq!(noah.final_score, 46);
    assert_eq!(
        noah.top_quick_win.as_deref(),
        Some("Build Coding Foundation")
    );
}

#[test]
fn imported_rows_match_direct_evaluation() {
    let csv = "Candidate,Experience,Current Role,Problem Solving,System Design,Portfolio,Target Role,Target Company\n\
Mara Silva,3-5,swe-product,51-100,participated,limited-1-5,backend,product\n";

    let service = service();
    let review = CohortReview::from_reader(csv.as_bytes(), &service).expect("import succeeds");
    let direct = service
        .evaluate(&json!({
            "experience": "3-5",
            "current_role": "swe-product",
            "problem_solving": "51-100",
            "system_design": "participated",
            "portfolio": "limited-1-5",
            "target_role": "backend",
            "target_company": "product",
        }))
        .expect("direct evaluation succeeds");

    let entry = &review.entries[0];
    assert_eq!(entry.final_score, direct.final_score);
    assert_eq!(entry.tier, direct.seniority.tier);
    assert_eq!(entry.flags, direct.contradictions.rules.len());
    assert_eq!(
        entry.top_quick_win.as_deref(),
        direct.quick_wins.first().map(|item| item.title.as_str()),
    );
}

#[test]
fn import_handles_full_sample_export() {
    let data = include_bytes!("../sample_cohort.csv");

    let review = CohortReview::from_reader(&data[..], &service()).expect("sample export imports");

    assert_eq!(review.entries.len(), 8);
    assert_eq!(review.summary.evaluated, 8);
    assert_eq!(review.summary.flagged, 2);
    assert!(review.summary.average_score >= 55.0);
    assert!(review.summary.average_score <= 70.0);

    let count_for = |tier: SeniorityTier| {
        review
            .summary
            .tier_counts
            .iter()
            .find(|count| count.tier == tier)
            .map(|count| count.count)
    };
    assert_eq!(count_for(SeniorityTier::Entry), Some(2));
    assert_eq!(count_for(SeniorityTier::Mid), Some(2));
    assert_eq!(count_for(SeniorityTier::Senior), Some(3));
    assert_eq!(count_for(SeniorityTier::Staff), Some(1));

    let anonymous = &review.entries[6];
    assert_eq!(anonymous.candidate, "candidate-7");
    assert_eq!(anonymous.tier, SeniorityTier::Mid);

    let undated = &review.entries[7];
    assert_eq!(undated.candidate, "Lena Fischer");
    assert!(undated.submitted_on.is_none());
    assert_eq!(undated.tier, SeniorityTier::Senior);

    assert!(review
        .entries
        .iter()
        .all(|entry| entry.final_score >= 45 && entry.final_score <= 100));
    assert!(review
        .entries
        .iter()
        .all(|entry| entry.top_quick_win.is_some()));
}

#[test]
fn missing_export_surfaces_io_error() {
    let error = CohortReview::from_path("./no-such-cohort.csv", &service())
        .expect_err("missing file should fail");

    match error {
        CohortImportError::Io(_) => {}
        other => panic!("expected io error, got {other:?}"),
    }
}
