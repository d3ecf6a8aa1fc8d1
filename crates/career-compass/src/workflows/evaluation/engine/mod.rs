mod config;
mod policy;
mod rules;

pub use config::{ContradictionWeights, ScoringConfig};
pub use policy::{SeniorityAssessment, SeniorityTier};
pub use rules::{ContradictionReport, ContradictionRule};

use serde::{Deserialize, Serialize};

use super::domain::{ScoreFactor, SignalSet};
use policy::classify_seniority;

/// Stateless evaluator that applies the rubric configuration to a profile.
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn evaluate(&self, signals: &SignalSet) -> ScoreOutcome {
        let (components, raw_score, report) = rules::score_signals(signals, &self.config);
        let final_score = rules::finalize_score(raw_score, signals, &self.config);
        let seniority = classify_seniority(signals, &self.config, &report, final_score);

        let contradictions = ContradictionSummary {
            flagged: report.flagged(),
            penalty: report.penalty,
            rules: report.triggered,
        };

        ScoreOutcome {
            raw_score,
            final_score,
            seniority,
            contradictions,
            components,
        }
    }
}

/// Discrete contribution to an evaluation, allowing transparent audits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    pub score: i16,
    pub notes: String,
}

/// Flag outcome carried alongside the score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContradictionSummary {
    pub flagged: bool,
    pub penalty: i16,
    pub rules: Vec<ContradictionRule>,
}

/// Evaluation output describing the composite score and decision trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreOutcome {
    pub raw_score: i16,
    pub final_score: i16,
    pub seniority: SeniorityAssessment,
    pub contradictions: ContradictionSummary,
    pub components: Vec<ScoreComponent>,
}
