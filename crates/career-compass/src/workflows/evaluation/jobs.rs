use serde::Serialize;

use super::blueprint::{JobTemplate, RecommendationBlueprint, TemplateLevel};
use super::domain::{CompanyTier, RoleContext, SignalSet, TargetRole, TechFocus};
use super::engine::{SeniorityAssessment, SeniorityTier};

const MAX_POSTINGS: usize = 7;

/// One matched opening. `requirement` is a short skill line from the
/// template pool, never a company name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobPosting {
    pub title: String,
    pub seniority: SeniorityTier,
    pub seniority_label: &'static str,
    pub company_tier: CompanyTier,
    pub company_tier_label: &'static str,
    pub requirement: &'static str,
}

/// Which board the templates come from, by target role first and current
/// role context as the tie-breaker for undecided candidates.
pub(crate) fn infer_focus(signals: &SignalSet) -> TechFocus {
    match signals.target_role {
        TargetRole::Backend | TargetRole::SeniorBackend => TechFocus::Backend,
        TargetRole::Fullstack | TargetRole::SeniorFullstack => TechFocus::Fullstack,
        TargetRole::Frontend => TechFocus::Frontend,
        TargetRole::DataMl => TechFocus::Data,
        TargetRole::TechLead => TechFocus::Architecture,
        TargetRole::Exploring => {
            if signals.role_context == RoleContext::InfraOps {
                TechFocus::DevOps
            } else {
                TechFocus::Fullstack
            }
        }
    }
}

fn template_level(focus: TechFocus, tier: SeniorityTier) -> TemplateLevel {
    if focus == TechFocus::Architecture {
        match tier {
            SeniorityTier::Staff => return TemplateLevel::Architect,
            SeniorityTier::Senior => return TemplateLevel::Lead,
            _ => {}
        }
    }
    match tier {
        SeniorityTier::Entry => TemplateLevel::Junior,
        SeniorityTier::Mid => TemplateLevel::Mid,
        SeniorityTier::Senior | SeniorityTier::Staff => TemplateLevel::Senior,
    }
}

/// Nearest-key fallback: exact, then the same level on the fullstack board,
/// then the mid-level fullstack board.
fn resolve_template(
    blueprint: &RecommendationBlueprint,
    focus: TechFocus,
    level: TemplateLevel,
) -> Option<&JobTemplate> {
    blueprint
        .job_template(focus, level)
        .or_else(|| blueprint.job_template(TechFocus::Fullstack, level))
        .or_else(|| blueprint.job_template(TechFocus::Fullstack, TemplateLevel::Mid))
}

fn posting_title(signals: &SignalSet, focus: TechFocus, level: TemplateLevel) -> String {
    let base = match signals.target_role {
        TargetRole::Exploring => focus.label(),
        role => role.label(),
    };

    if level >= TemplateLevel::Senior && !signals.target_role.senior_intent() {
        format!("Senior {base}")
    } else {
        base.to_string()
    }
}

pub(crate) fn match_openings(
    signals: &SignalSet,
    seniority: &SeniorityAssessment,
    blueprint: &RecommendationBlueprint,
) -> Vec<JobPosting> {
    let focus = infer_focus(signals);
    let level = template_level(focus, seniority.matching_tier);

    let Some(template) = resolve_template(blueprint, focus, level) else {
        return Vec::new();
    };

    let title = posting_title(signals, focus, template.level);
    let posting_tier = template.level.tier();

    template
        .requirements
        .iter()
        .copied()
        .take(MAX_POSTINGS)
        .map(|requirement| JobPosting {
            title: title.clone(),
            seniority: posting_tier,
            seniority_label: posting_tier.label(),
            company_tier: signals.target_company,
            company_tier_label: signals.target_company.label(),
            requirement,
        })
        .collect()
}
