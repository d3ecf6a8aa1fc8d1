use super::super::domain::{
    CompanyTier, DesignExposure, ExperienceBand, PortfolioActivity, PracticeLevel, RoleContext,
    SignalSet, TargetRole,
};
use super::super::engine::ScoreOutcome;
use super::super::normalize::NormalizationNote;
use super::views::{NarrativeContext, NarrativeDraft, NarrativeReview, SignalLabels};

const MAX_STRENGTHS: usize = 5;

fn collect_strengths(signals: &SignalSet) -> Vec<String> {
    let mut strengths = Vec::new();

    match signals.experience {
        ExperienceBand::Senior | ExperienceBand::Staff => strengths.push(format!(
            "{} of production engineering experience",
            signals.experience.label()
        )),
        ExperienceBand::Mid => {
            strengths.push("Solid professional experience to build on".to_string());
        }
        _ => {}
    }
    if signals.coding_practice >= PracticeLevel::Moderate {
        strengths.push(format!(
            "Consistent recent practice ({})",
            signals.coding_practice.label()
        ));
    }
    match signals.design_exposure {
        DesignExposure::Multiple => {
            strengths.push("Led multiple system design discussions".to_string());
        }
        DesignExposure::Single => {
            strengths.push("First-hand exposure to system design discussions".to_string());
        }
        _ => {}
    }
    match signals.portfolio {
        PortfolioActivity::Active => {
            strengths.push("An active public portfolio of 5+ repositories".to_string());
        }
        PortfolioActivity::Limited => {
            strengths.push("Shipped portfolio projects to point interviewers at".to_string());
        }
        _ => {}
    }
    strengths.push(
        match signals.role_context {
            RoleContext::Product => "Day-to-day product engineering exposure",
            RoleContext::Service => "Delivery breadth from service-company work",
            RoleContext::InfraOps => "Operational experience running production systems",
            RoleContext::QaSupport => "A quality-first perspective from QA and support work",
            RoleContext::NonTechnical => "Transferable skills from a non-engineering background",
        }
        .to_string(),
    );
    match signals.target_role {
        TargetRole::Exploring => {
            strengths.push("Openness to several role paths keeps options wide".to_string());
        }
        role => strengths.push(format!("A clear goal: {}", role.label())),
    }
    match signals.target_company {
        CompanyTier::Any => {
            strengths.push("Flexibility across company types widens the funnel".to_string());
        }
        tier => strengths.push(format!("A defined company target: {}", tier.label())),
    }

    strengths.truncate(MAX_STRENGTHS);
    strengths
}

fn collect_development_areas(signals: &SignalSet) -> Vec<String> {
    let mut areas = Vec::new();

    areas.push(match signals.coding_practice {
        PracticeLevel::None if signals.experience >= ExperienceBand::Senior => {
            "Refresh interview problem solving to match the production depth".to_string()
        }
        PracticeLevel::None => {
            "Build coding fundamentals and aim for 100+ solved problems".to_string()
        }
        PracticeLevel::Low => format!(
            "Increase problem volume toward 100+ (currently {})",
            signals.coding_practice.label()
        ),
        PracticeLevel::Moderate => "Push into harder problems to round out preparation".to_string(),
        PracticeLevel::High => "Keep practice sharp with regular hard problems".to_string(),
    });
    areas.push(match signals.design_exposure {
        DesignExposure::None if signals.experience >= ExperienceBand::Mid => {
            "Master system design, the differentiator for senior roles".to_string()
        }
        DesignExposure::None => "Start system design preparation from the fundamentals".to_string(),
        DesignExposure::Learning => {
            "Move system design from theory to practiced discussion".to_string()
        }
        DesignExposure::Single => {
            "Lead more design discussions to build senior-level expertise".to_string()
        }
        DesignExposure::Multiple => {
            "Write up past design decisions as interview stories".to_string()
        }
    });
    areas.push(match signals.portfolio {
        PortfolioActivity::None => "Showcase work with 3-5 public projects".to_string(),
        PortfolioActivity::Inactive => "Revive the portfolio with recent work".to_string(),
        PortfolioActivity::Limited => "Expand the portfolio to 5+ quality projects".to_string(),
        PortfolioActivity::Active => "Keep the portfolio current while interviewing".to_string(),
    });

    areas
}

/// Assembles the fact sheet handed to the external narrative generator.
pub(crate) fn build_narrative_context(
    signals: &SignalSet,
    outcome: &ScoreOutcome,
    notes: &[NormalizationNote],
    tolerance: i16,
) -> NarrativeContext {
    let labels = SignalLabels {
        experience: signals.experience.label(),
        current_role: signals.role_context.label(),
        coding_practice: signals.coding_practice.label(),
        system_design: signals.design_exposure.label(),
        portfolio: signals.portfolio.label(),
        target_role: signals.target_role.label(),
        target_company: signals.target_company.label(),
    };

    NarrativeContext {
        final_score: outcome.final_score,
        tolerance,
        tier_label: outcome.seniority.tier.label(),
        matching_tier_label: outcome.seniority.matching_tier.label(),
        signals: labels,
        strengths: collect_strengths(signals),
        development_areas: collect_development_areas(signals),
        caveats: outcome
            .contradictions
            .rules
            .iter()
            .map(|rule| rule.caveat())
            .collect(),
        defaulted_fields: notes.iter().map(|note| note.field.label()).collect(),
    }
}

/// Checks a prose draft's numeric and tier claims against the computed
/// outcome. Out-of-band claims become breaches; nothing is mutated.
pub(crate) fn review_narrative(
    draft: &NarrativeDraft,
    outcome: &ScoreOutcome,
    tolerance: i16,
) -> NarrativeReview {
    let mut breaches = Vec::new();

    if let Some(stated) = draft.stated_score {
        if (stated - outcome.final_score).abs() > tolerance {
            breaches.push(format!(
                "stated score {} differs from the computed {} by more than {}",
                stated, outcome.final_score, tolerance
            ));
        }
    }
    if let Some(stated) = draft.stated_tier {
        let assessment = outcome.seniority;
        if stated != assessment.tier && stated != assessment.matching_tier {
            breaches.push(format!(
                "stated tier {} does not match the assessed {}",
                stated.label(),
                assessment.tier.label()
            ));
        }
    }
    for &stated in &draft.stated_percentages {
        if (stated - outcome.final_score).abs() > tolerance {
            breaches.push(format!(
                "stated percentage {} differs from the computed score {} by more than {}",
                stated, outcome.final_score, tolerance
            ));
        }
    }

    NarrativeReview {
        accepted: breaches.is_empty(),
        breaches,
    }
}
