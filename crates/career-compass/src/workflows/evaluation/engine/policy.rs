use serde::{Deserialize, Serialize};

use super::super::domain::{DesignExposure, ExperienceBand, SignalSet};
use super::config::ScoringConfig;
use super::rules::ContradictionReport;

/// Career ladder rung the rubric assigns to a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeniorityTier {
    Entry,
    Mid,
    Senior,
    Staff,
}

impl SeniorityTier {
    pub const fn label(&self) -> &'static str {
        match self {
            SeniorityTier::Entry => "Entry",
            SeniorityTier::Mid => "Mid-level",
            SeniorityTier::Senior => "Senior",
            SeniorityTier::Staff => "Staff",
        }
    }

    pub const fn step_down(&self) -> SeniorityTier {
        match self {
            SeniorityTier::Entry => SeniorityTier::Entry,
            SeniorityTier::Mid | SeniorityTier::Senior => SeniorityTier::Mid,
            SeniorityTier::Staff => SeniorityTier::Senior,
        }
    }

    pub const fn all() -> [SeniorityTier; 4] {
        [
            SeniorityTier::Entry,
            SeniorityTier::Mid,
            SeniorityTier::Senior,
            SeniorityTier::Staff,
        ]
    }
}

/// Reported tier plus the tier downstream matching should target.
///
/// The two differ only for flagged profiles at senior tenure, where job
/// matching aims one rung below the stated level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeniorityAssessment {
    pub tier: SeniorityTier,
    pub matching_tier: SeniorityTier,
}

pub(crate) fn classify_seniority(
    signals: &SignalSet,
    config: &ScoringConfig,
    contradictions: &ContradictionReport,
    final_score: i16,
) -> SeniorityAssessment {
    let base = match signals.experience {
        ExperienceBand::None | ExperienceBand::Junior => SeniorityTier::Entry,
        ExperienceBand::Mid => SeniorityTier::Mid,
        ExperienceBand::Senior => SeniorityTier::Senior,
        ExperienceBand::Staff => SeniorityTier::Staff,
    };

    // Stated tenure is durable; flags withhold promotions but never demote.
    // Promotions start from the experience band, so a mid profile can reach
    // at most senior in a single evaluation.
    let mut tier = base;
    if !contradictions.flagged() {
        if base == SeniorityTier::Mid
            && final_score >= config.senior_promotion_score
            && signals.design_exposure >= DesignExposure::Single
        {
            tier = SeniorityTier::Senior;
        } else if base == SeniorityTier::Senior
            && final_score >= config.staff_promotion_score
            && signals.design_exposure == DesignExposure::Multiple
        {
            tier = SeniorityTier::Staff;
        }
    }

    let matching_tier = if contradictions.flagged() && base >= SeniorityTier::Senior {
        tier.step_down()
    } else {
        tier
    };

    SeniorityAssessment {
        tier,
        matching_tier,
    }
}
