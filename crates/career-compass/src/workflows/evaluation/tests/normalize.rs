use serde_json::json;

use super::common::*;
use crate::workflows::evaluation::domain::{
    CompanyTier, DesignExposure, ExperienceBand, PortfolioActivity, PracticeLevel, RoleContext,
    SignalField, TargetRole,
};
use crate::workflows::evaluation::normalize::{NormalizationError, SignalNormalizer};

#[test]
fn canonical_submissions_normalize_without_notes() {
    let normalizer = SignalNormalizer::default();

    let (signals, notes) = normalizer
        .normalize(&submission_json())
        .expect("submission normalizes");

    assert_eq!(signals, strong_senior());
    assert!(notes.is_empty(), "unexpected notes: {notes:?}");
}

#[test]
fn legacy_aliases_resolve_to_the_same_signals() {
    let normalizer = SignalNormalizer::default();
    let legacy = json!({
        "yearsofexperience": "senior",
        "role": "product",
        "practice": "high",
        "design": "led-multiple",
        "publicwork": "active",
        "goalrole": "senior-backend",
        "companytier": "big-tech",
    });

    let (signals, notes) = normalizer.normalize(&legacy).expect("legacy normalizes");

    assert_eq!(signals, strong_senior());
    assert!(notes.is_empty());
}

#[test]
fn keys_match_case_insensitively_and_ignore_separators() {
    let normalizer = SignalNormalizer::default();
    let spaced = json!({
        "Years Of Experience": "5-8",
        "Current-Role": "SWE-Product",
        "Problem Solving": "100+",
        "System_Design": "Multiple",
        "Portfolio": "Active-5+",
        "Target Role": "Senior-Backend",
        "Target Company": "FAANG",
    });

    let (signals, notes) = normalizer.normalize(&spaced).expect("spaced keys normalize");

    assert_eq!(signals, strong_senior());
    assert!(notes.is_empty());
}

#[test]
fn missing_fields_default_with_notes() {
    let normalizer = SignalNormalizer::default();

    let (signals, notes) = normalizer
        .normalize(&json!({}))
        .expect("empty object normalizes");

    assert_eq!(signals.experience, ExperienceBand::None);
    assert_eq!(signals.role_context, RoleContext::NonTechnical);
    assert_eq!(signals.coding_practice, PracticeLevel::None);
    assert_eq!(signals.design_exposure, DesignExposure::None);
    assert_eq!(signals.portfolio, PortfolioActivity::None);
    assert_eq!(signals.target_role, TargetRole::Exploring);
    assert_eq!(signals.target_company, CompanyTier::Any);

    assert_eq!(notes.len(), 7);
    assert!(notes.iter().all(|note| note.detail.contains("missing")));
}

#[test]
fn unrecognized_values_default_with_notes() {
    let normalizer = SignalNormalizer::default();

    let (signals, notes) = normalizer
        .normalize(&json!({ "experience": "a decade" }))
        .expect("submission normalizes");

    assert_eq!(signals.experience, ExperienceBand::None);
    let note = notes
        .iter()
        .find(|note| note.field == SignalField::Experience)
        .expect("experience note present");
    assert!(note.detail.contains("unrecognized value 'a decade'"));
}

#[test]
fn null_and_blank_values_count_as_missing() {
    let normalizer = SignalNormalizer::default();

    let (signals, notes) = normalizer
        .normalize(&json!({ "experience": null, "portfolio": "   " }))
        .expect("submission normalizes");

    assert_eq!(signals.experience, ExperienceBand::None);
    assert_eq!(signals.portfolio, PortfolioActivity::None);
    assert_eq!(notes.len(), 7);
    assert!(notes
        .iter()
        .filter(|note| note.field == SignalField::Portfolio)
        .all(|note| note.detail.contains("missing")));
}

#[test]
fn background_marker_stands_in_for_the_role_field() {
    let normalizer = SignalNormalizer::default();

    let (signals, notes) = normalizer
        .normalize(&json!({ "background": "career-switcher" }))
        .expect("submission normalizes");

    assert_eq!(signals.role_context, RoleContext::NonTechnical);
    assert!(notes.iter().any(|note| {
        note.field == SignalField::RoleContext && note.detail.contains("derived")
    }));
}

#[test]
fn technical_background_markers_do_not_set_the_role() {
    let normalizer = SignalNormalizer::default();

    let (signals, notes) = normalizer
        .normalize(&json!({ "background": "swe-product" }))
        .expect("submission normalizes");

    assert_eq!(signals.role_context, RoleContext::NonTechnical);
    assert!(notes.iter().any(|note| {
        note.field == SignalField::RoleContext && note.detail.contains("missing")
    }));
}

#[test]
fn non_object_submissions_are_rejected() {
    let normalizer = SignalNormalizer::default();

    match normalizer.normalize(&json!(["experience", "5-8"])) {
        Err(NormalizationError::NotAnObject) => {}
        other => panic!("expected structural rejection, got {other:?}"),
    }
}

#[test]
fn non_string_values_are_rejected_with_the_field_name() {
    let normalizer = SignalNormalizer::default();

    match normalizer.normalize(&json!({ "experience": 5 })) {
        Err(NormalizationError::NonStringValue { field }) => assert_eq!(field, "experience"),
        other => panic!("expected non-string rejection, got {other:?}"),
    }
}

#[test]
fn unknown_keys_are_ignored() {
    let normalizer = SignalNormalizer::default();
    let mut payload = submission_json();
    payload["favourite_editor"] = json!("helix");

    let (signals, notes) = normalizer.normalize(&payload).expect("submission normalizes");

    assert_eq!(signals, strong_senior());
    assert!(notes.is_empty());
}
