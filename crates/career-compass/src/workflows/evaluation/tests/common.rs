use std::sync::Arc;

use axum::response::Response;
use serde_json::{json, Value};

use crate::workflows::evaluation::domain::{
    CompanyTier, DesignExposure, ExperienceBand, PortfolioActivity, PracticeLevel, RoleContext,
    SignalSet, TargetRole,
};
use crate::workflows::evaluation::engine::{ScoringConfig, ScoringEngine};
use crate::workflows::evaluation::{evaluation_router, EvaluationService};

pub(super) fn config() -> ScoringConfig {
    ScoringConfig::standard()
}

pub(super) fn engine() -> ScoringEngine {
    ScoringEngine::new(config())
}

pub(super) fn service() -> EvaluationService {
    EvaluationService::new(config())
}

pub(super) fn evaluation_router_with_service() -> axum::Router {
    evaluation_router(Arc::new(service()))
}

/// Clean senior profile that maxes every rubric factor.
pub(super) fn strong_senior() -> SignalSet {
    SignalSet {
        experience: ExperienceBand::Senior,
        role_context: RoleContext::Product,
        coding_practice: PracticeLevel::High,
        design_exposure: DesignExposure::Multiple,
        portfolio: PortfolioActivity::Active,
        target_role: TargetRole::SeniorBackend,
        target_company: CompanyTier::Faang,
    }
}

/// Early-career switcher claiming broad design leadership with no practice
/// or portfolio to back it.
pub(super) fn overreaching_entry() -> SignalSet {
    SignalSet {
        experience: ExperienceBand::Junior,
        role_context: RoleContext::NonTechnical,
        coding_practice: PracticeLevel::None,
        design_exposure: DesignExposure::Multiple,
        portfolio: PortfolioActivity::None,
        target_role: TargetRole::TechLead,
        target_company: CompanyTier::Faang,
    }
}

/// Unremarkable mid-band profile with no contradictions.
pub(super) fn mid_profile() -> SignalSet {
    SignalSet {
        experience: ExperienceBand::Mid,
        role_context: RoleContext::Service,
        coding_practice: PracticeLevel::Moderate,
        design_exposure: DesignExposure::Single,
        portfolio: PortfolioActivity::Limited,
        target_role: TargetRole::Backend,
        target_company: CompanyTier::Product,
    }
}

/// Builds a profile over the four scored axes with fixed role and targets.
pub(super) fn profile(
    experience: ExperienceBand,
    practice: PracticeLevel,
    design: DesignExposure,
    portfolio: PortfolioActivity,
) -> SignalSet {
    SignalSet {
        experience,
        role_context: RoleContext::Product,
        coding_practice: practice,
        design_exposure: design,
        portfolio,
        target_role: TargetRole::Backend,
        target_company: CompanyTier::Product,
    }
}

/// Every combination of the four scored axes, 320 profiles in total.
pub(super) fn every_profile() -> Vec<SignalSet> {
    let mut profiles = Vec::new();
    for band in ExperienceBand::all() {
        for practice in PracticeLevel::all() {
            for design in DesignExposure::all() {
                for portfolio in PortfolioActivity::all() {
                    profiles.push(profile(band, practice, design, portfolio));
                }
            }
        }
    }
    profiles
}

pub(super) fn submission_json() -> Value {
    json!({
        "experience": "5-8",
        "current_role": "swe-product",
        "problem_solving": "100+",
        "system_design": "multiple",
        "portfolio": "active-5+",
        "target_role": "senior-backend",
        "target_company": "faang",
    })
}

pub(super) fn contradictory_submission_json() -> Value {
    json!({
        "experience": "0-2",
        "current_role": "career-switcher",
        "problem_solving": "0-10",
        "system_design": "led-multiple",
        "portfolio": "none",
        "target_role": "tech-lead",
        "target_company": "faang",
    })
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
