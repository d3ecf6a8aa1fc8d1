use super::common::*;
use crate::workflows::evaluation::blueprint::RecommendationBlueprint;
use crate::workflows::evaluation::domain::{
    CompanyTier, DesignExposure, ExperienceBand, PortfolioActivity, PracticeLevel, RoleContext,
    SignalSet, TargetRole,
};
use crate::workflows::evaluation::engine::SeniorityTier;
use crate::workflows::evaluation::jobs::match_openings;

#[test]
fn posting_counts_stay_between_five_and_seven() {
    let engine = engine();
    let blueprint = RecommendationBlueprint::standard();

    for profile in every_profile() {
        let outcome = engine.evaluate(&profile);
        let openings = match_openings(&profile, &outcome.seniority, &blueprint);
        assert!(
            (5..=7).contains(&openings.len()),
            "{:?} produced {} openings",
            profile,
            openings.len()
        );
    }
}

#[test]
fn staff_matches_pull_from_the_senior_board() {
    let signals = strong_senior();
    let outcome = engine().evaluate(&signals);
    let openings = match_openings(&signals, &outcome.seniority, &RecommendationBlueprint::standard());

    assert_eq!(outcome.seniority.matching_tier, SeniorityTier::Staff);
    for posting in &openings {
        assert_eq!(posting.title, "Senior Backend Engineer");
        assert_eq!(posting.seniority, SeniorityTier::Senior);
        assert_eq!(posting.company_tier, CompanyTier::Faang);
        assert_eq!(posting.company_tier_label, "FAANG / Big Tech");
    }
}

#[test]
fn modest_targets_gain_a_senior_prefix_at_senior_rungs() {
    let signals = profile(
        ExperienceBand::Senior,
        PracticeLevel::High,
        DesignExposure::Single,
        PortfolioActivity::Active,
    );
    let outcome = engine().evaluate(&signals);
    let openings = match_openings(&signals, &outcome.seniority, &RecommendationBlueprint::standard());

    assert_eq!(outcome.seniority.matching_tier, SeniorityTier::Senior);
    assert!(openings
        .iter()
        .all(|posting| posting.title == "Senior Backend Engineer"));
}

#[test]
fn entry_matches_pull_from_the_junior_board() {
    let signals = profile(
        ExperienceBand::Junior,
        PracticeLevel::Low,
        DesignExposure::None,
        PortfolioActivity::None,
    );
    let outcome = engine().evaluate(&signals);
    let openings = match_openings(&signals, &outcome.seniority, &RecommendationBlueprint::standard());

    assert_eq!(openings.len(), 6);
    for posting in &openings {
        assert_eq!(posting.title, "Backend Engineer");
        assert_eq!(posting.seniority, SeniorityTier::Entry);
        assert_eq!(posting.seniority_label, "Entry");
    }
}

#[test]
fn architecture_targets_below_lead_fall_back_to_fullstack_boards() {
    let signals = overreaching_entry();
    let outcome = engine().evaluate(&signals);
    let openings = match_openings(&signals, &outcome.seniority, &RecommendationBlueprint::standard());

    assert_eq!(outcome.seniority.matching_tier, SeniorityTier::Entry);
    assert!(!openings.is_empty());
    assert!(openings
        .iter()
        .all(|posting| posting.seniority == SeniorityTier::Entry));
    assert!(openings
        .iter()
        .any(|posting| posting.requirement.contains("React + Node.js")));
}

#[test]
fn staff_matching_tech_leads_get_the_architect_board() {
    let signals = SignalSet {
        target_role: TargetRole::TechLead,
        ..strong_senior()
    };
    let outcome = engine().evaluate(&signals);
    let openings = match_openings(&signals, &outcome.seniority, &RecommendationBlueprint::standard());

    assert_eq!(outcome.seniority.matching_tier, SeniorityTier::Staff);
    for posting in &openings {
        assert_eq!(posting.title, "Tech Lead");
        assert_eq!(posting.seniority, SeniorityTier::Staff);
    }
    assert!(openings
        .iter()
        .any(|posting| posting.requirement.contains("Enterprise architecture")));
}

#[test]
fn exploring_targets_use_the_inferred_focus_title() {
    let signals = SignalSet {
        experience: ExperienceBand::Mid,
        role_context: RoleContext::InfraOps,
        coding_practice: PracticeLevel::Moderate,
        design_exposure: DesignExposure::Single,
        portfolio: PortfolioActivity::Limited,
        target_role: TargetRole::Exploring,
        target_company: CompanyTier::Any,
    };
    let outcome = engine().evaluate(&signals);
    let openings = match_openings(&signals, &outcome.seniority, &RecommendationBlueprint::standard());

    assert_eq!(outcome.seniority.matching_tier, SeniorityTier::Mid);
    for posting in &openings {
        assert_eq!(posting.title, "DevOps Engineer");
        assert_eq!(posting.seniority, SeniorityTier::Mid);
    }
    assert!(openings
        .iter()
        .any(|posting| posting.requirement.contains("Kubernetes")));
}
