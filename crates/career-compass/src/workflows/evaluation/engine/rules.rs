use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::super::domain::{
    DesignExposure, ExperienceBand, PortfolioActivity, PracticeLevel, ScoreFactor, SignalSet,
};
use super::config::ScoringConfig;
use super::ScoreComponent;

/// Internal-inconsistency patterns the rubric checks before trusting a
/// self-reported profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContradictionRule {
    DesignWithoutPractice,
    UnpreparedSenior,
    UntestedPortfolio,
    EntryDesignClaim,
}

impl ContradictionRule {
    pub const fn label(&self) -> &'static str {
        match self {
            ContradictionRule::DesignWithoutPractice => {
                "design leadership claimed without matching coding practice"
            }
            ContradictionRule::UnpreparedSenior => {
                "senior experience with no recent interview preparation"
            }
            ContradictionRule::UntestedPortfolio => {
                "active portfolio but no coding practice signal"
            }
            ContradictionRule::EntryDesignClaim => {
                "early-career profile claiming broad design leadership"
            }
        }
    }

    pub const fn caveat(&self) -> &'static str {
        match self {
            ContradictionRule::DesignWithoutPractice => {
                "back the design story with sustained hands-on problem solving"
            }
            ContradictionRule::UnpreparedSenior => {
                "rebuild coding and design fluency before interviewing"
            }
            ContradictionRule::UntestedPortfolio => {
                "pair shipped projects with interview-style practice"
            }
            ContradictionRule::EntryDesignClaim => {
                "ground the design claim in verifiable artifacts"
            }
        }
    }
}

/// Which rules fired and the capped penalty they add up to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContradictionReport {
    pub triggered: Vec<ContradictionRule>,
    pub penalty: i16,
}

impl ContradictionReport {
    pub fn flagged(&self) -> bool {
        !self.triggered.is_empty()
    }
}

pub(crate) fn detect_contradictions(
    signals: &SignalSet,
    config: &ScoringConfig,
) -> ContradictionReport {
    let weights = &config.contradiction_weights;
    let mut triggered = Vec::new();
    let mut penalty: i16 = 0;

    if signals.design_exposure == DesignExposure::Multiple
        && signals.coding_practice <= PracticeLevel::Low
        && signals.experience <= ExperienceBand::Mid
    {
        triggered.push(ContradictionRule::DesignWithoutPractice);
        penalty += weights.design_without_practice;
    }

    if signals.experience >= ExperienceBand::Senior
        && signals.coding_practice == PracticeLevel::None
        && signals.design_exposure <= DesignExposure::Learning
    {
        triggered.push(ContradictionRule::UnpreparedSenior);
        penalty += weights.unprepared_senior;
    }

    if signals.portfolio == PortfolioActivity::Active
        && signals.coding_practice == PracticeLevel::None
    {
        triggered.push(ContradictionRule::UntestedPortfolio);
        penalty += weights.untested_portfolio;
    }

    if signals.experience <= ExperienceBand::Junior
        && signals.design_exposure == DesignExposure::Multiple
        && signals.coding_practice <= PracticeLevel::Moderate
    {
        triggered.push(ContradictionRule::EntryDesignClaim);
        penalty += weights.entry_design_claim;
    }

    ContradictionReport {
        triggered,
        penalty: penalty.min(weights.penalty_cap),
    }
}

pub(crate) fn score_signals(
    signals: &SignalSet,
    config: &ScoringConfig,
) -> (Vec<ScoreComponent>, i16, ContradictionReport) {
    let mut components = Vec::new();
    let mut total_score: i16 = 0;

    let quality = config.quality_for_role(signals.role_context);
    let experience_points =
        (config.points_for_experience(signals.experience) as f32 * quality) as i16;
    components.push(ScoreComponent {
        factor: ScoreFactor::Experience,
        score: experience_points,
        notes: format!(
            "{} weighted at {:.2} for {}",
            signals.experience.label(),
            quality,
            signals.role_context.label()
        ),
    });
    total_score += experience_points;

    let design_points = config.points_for_design(signals.design_exposure, signals.experience);
    let design_scale = if signals.experience >= ExperienceBand::Senior {
        "senior"
    } else {
        "foundation"
    };
    components.push(ScoreComponent {
        factor: ScoreFactor::DesignExposure,
        score: design_points,
        notes: format!(
            "{} on the {design_scale} scale",
            signals.design_exposure.label()
        ),
    });
    total_score += design_points;

    let practice_points = config.points_for_practice(signals.coding_practice);
    components.push(ScoreComponent {
        factor: ScoreFactor::CodingPractice,
        score: practice_points,
        notes: format!("{} of recent problem solving", signals.coding_practice.label()),
    });
    total_score += practice_points;

    // Shipped work without any practice signal only earns half credit.
    let mut portfolio_points = config.points_for_portfolio(signals.portfolio);
    let portfolio_notes = if signals.coding_practice == PracticeLevel::None && portfolio_points > 0
    {
        portfolio_points /= 2;
        format!(
            "{} discounted for missing practice",
            signals.portfolio.label()
        )
    } else {
        signals.portfolio.label().to_string()
    };
    components.push(ScoreComponent {
        factor: ScoreFactor::Portfolio,
        score: portfolio_points,
        notes: portfolio_notes,
    });
    total_score += portfolio_points;

    let contradictions = detect_contradictions(signals, config);
    if contradictions.flagged() {
        let labels: Vec<&str> = contradictions
            .triggered
            .iter()
            .map(ContradictionRule::label)
            .collect();
        components.push(ScoreComponent {
            factor: ScoreFactor::ContradictionPenalty,
            score: -contradictions.penalty,
            notes: labels.join("; "),
        });
        total_score -= contradictions.penalty;
    }

    (components, total_score, contradictions)
}

fn signal_digest(signals: &SignalSet) -> u64 {
    let mut hasher = DefaultHasher::new();
    signals.hash(&mut hasher);
    hasher.finish()
}

/// Clamps the raw score into the reportable band, then nudges it off any
/// multiple of five with a profile-keyed offset so identical submissions
/// always land on the same final number.
pub(crate) fn finalize_score(raw_score: i16, signals: &SignalSet, config: &ScoringConfig) -> i16 {
    let floor = config.score_floor;
    let ceiling = config.score_ceiling;
    let digest = signal_digest(signals);

    let window = 2 * config.jitter_span + 1;
    let offset = (digest % window.max(1) as u64) as i16 - config.jitter_span;

    let mut score = (raw_score + offset).clamp(floor, ceiling);
    if ceiling - floor < 2 {
        return score;
    }

    let mut step: i16 = if (digest >> 32) & 1 == 1 { 1 } else { -1 };
    while score % 5 == 0 {
        let next = score + step;
        if next < floor || next > ceiling {
            step = -step;
        } else {
            score = next;
        }
    }

    score
}
