use super::common::*;
use crate::workflows::evaluation::blueprint::{RecommendationBlueprint, TOOL_DENYLIST};
use crate::workflows::evaluation::domain::{
    CompanyTier, DesignExposure, ExperienceBand, PortfolioActivity, PracticeLevel, RoleContext,
    SignalSet, TargetRole,
};
use crate::workflows::evaluation::tools::recommend_tools;

#[test]
fn tool_counts_stay_between_four_and_eight() {
    let blueprint = RecommendationBlueprint::standard();

    for profile in every_profile() {
        let suggestions = recommend_tools(&profile, &blueprint);

        assert!(
            (4..=8).contains(&suggestions.len()),
            "{:?} produced {} tools",
            profile,
            suggestions.len()
        );
        for (index, suggestion) in suggestions.iter().enumerate() {
            assert!(
                suggestions[index + 1..]
                    .iter()
                    .all(|other| other.name != suggestion.name),
                "{:?} repeated '{}'",
                profile,
                suggestion.name
            );
        }
    }
}

#[test]
fn no_denylisted_platform_is_ever_suggested() {
    let blueprint = RecommendationBlueprint::standard();

    for profile in every_profile() {
        for suggestion in recommend_tools(&profile, &blueprint) {
            assert!(
                TOOL_DENYLIST
                    .iter()
                    .all(|banned| !suggestion.name.contains(banned)),
                "{:?} suggested denylisted '{}'",
                profile,
                suggestion.name
            );
        }
    }
}

#[test]
fn seasoned_profiles_get_design_aids_first() {
    let suggestions = recommend_tools(&strong_senior(), &RecommendationBlueprint::standard());

    assert_eq!(suggestions.len(), 8);
    assert_eq!(suggestions[0].name, "Excalidraw or Draw.io");
    assert!(suggestions.iter().any(|tool| tool.name == "Miro"));
    assert!(suggestions.iter().any(|tool| tool.name == "Terraform"));
    assert!(suggestions
        .iter()
        .any(|tool| tool.name == "Prometheus + Grafana"));
}

#[test]
fn junior_profiles_skip_design_and_advanced_shelves() {
    let suggestions = recommend_tools(
        &profile(
            ExperienceBand::Junior,
            PracticeLevel::Low,
            DesignExposure::None,
            PortfolioActivity::None,
        ),
        &RecommendationBlueprint::standard(),
    );

    assert_eq!(suggestions.len(), 4);
    assert_eq!(suggestions[0].name, "Postman or Insomnia");
    assert!(suggestions.iter().all(|tool| tool.name != "Terraform"));
    assert!(suggestions
        .iter()
        .all(|tool| !tool.name.contains("Excalidraw")));
}

#[test]
fn design_participation_unlocks_diagram_tools_early() {
    let suggestions = recommend_tools(
        &profile(
            ExperienceBand::Junior,
            PracticeLevel::Low,
            DesignExposure::Single,
            PortfolioActivity::None,
        ),
        &RecommendationBlueprint::standard(),
    );

    assert_eq!(suggestions[0].name, "Excalidraw or Draw.io");
    assert!(suggestions.iter().all(|tool| tool.name != "Terraform"));
}

#[test]
fn exploring_infra_profiles_get_devops_shelves() {
    let signals = SignalSet {
        experience: ExperienceBand::Mid,
        role_context: RoleContext::InfraOps,
        coding_practice: PracticeLevel::Moderate,
        design_exposure: DesignExposure::Single,
        portfolio: PortfolioActivity::Limited,
        target_role: TargetRole::Exploring,
        target_company: CompanyTier::Any,
    };

    let suggestions = recommend_tools(&signals, &RecommendationBlueprint::standard());

    assert!(suggestions
        .iter()
        .any(|tool| tool.name == "Terraform or Pulumi"));
    assert!(suggestions.iter().any(|tool| tool.name == "Vault"));
}
