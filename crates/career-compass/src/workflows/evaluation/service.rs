use serde_json::Value;

use super::blueprint::RecommendationBlueprint;
use super::domain::SignalSet;
use super::engine::{ScoringConfig, ScoringEngine};
use super::jobs::match_openings;
use super::normalize::{NormalizationError, NormalizationNote, SignalNormalizer};
use super::quick_wins::plan_quick_wins;
use super::report::views::{
    NarrativeDraft, NarrativeReview, RecommendationBundle, ScoreStatus, SeniorityView,
};
use super::report::{
    build_narrative_context, compare_with_peers, review_narrative, summarize_profile,
};
use super::timeline::{alternate_paths, plan_transition};
use super::tools::recommend_tools;

/// Facade composing the normalizer, scoring engine, and synthesizers.
///
/// Evaluation is pure: the same submission always assembles the same
/// bundle, so instances can be shared freely behind an `Arc`.
pub struct EvaluationService {
    normalizer: SignalNormalizer,
    engine: ScoringEngine,
    blueprint: RecommendationBlueprint,
}

impl EvaluationService {
    pub fn new(config: ScoringConfig) -> Self {
        Self::with_blueprint(config, RecommendationBlueprint::standard())
    }

    pub fn with_blueprint(config: ScoringConfig, blueprint: RecommendationBlueprint) -> Self {
        Self {
            normalizer: SignalNormalizer::default(),
            engine: ScoringEngine::new(config),
            blueprint,
        }
    }

    pub fn config(&self) -> &ScoringConfig {
        self.engine.config()
    }

    /// Run a raw questionnaire submission through the full pipeline.
    pub fn evaluate(&self, raw: &Value) -> Result<RecommendationBundle, EvaluationServiceError> {
        let (signals, notes) = self.normalizer.normalize(raw)?;
        Ok(self.evaluate_signals(&signals, notes))
    }

    /// Evaluate an already-normalized profile. Infallible: every lookup
    /// miss during synthesis falls back instead of erroring.
    pub fn evaluate_signals(
        &self,
        signals: &SignalSet,
        notes: Vec<NormalizationNote>,
    ) -> RecommendationBundle {
        let outcome = self.engine.evaluate(signals);
        let tolerance = self.engine.config().narrative_tolerance;

        let openings = match_openings(signals, &outcome.seniority, &self.blueprint);
        let quick_wins = plan_quick_wins(signals);
        let tools = recommend_tools(signals, &self.blueprint);
        let timeline = plan_transition(signals);
        let alternates = alternate_paths(signals);
        let profile = summarize_profile(signals);
        let peers = compare_with_peers(signals, outcome.final_score);
        let narrative = build_narrative_context(signals, &outcome, &notes, tolerance);

        let status = ScoreStatus::from_score(outcome.final_score);
        let seniority = SeniorityView {
            tier: outcome.seniority.tier,
            tier_label: outcome.seniority.tier.label(),
            matching_tier: outcome.seniority.matching_tier,
            matching_tier_label: outcome.seniority.matching_tier.label(),
        };

        RecommendationBundle {
            final_score: outcome.final_score,
            score_status: status,
            score_status_label: status.label(),
            seniority,
            contradictions: outcome.contradictions,
            normalization_notes: notes,
            score_components: outcome.components,
            openings,
            quick_wins,
            tools,
            timeline,
            alternate_paths: alternates,
            profile,
            peers,
            narrative,
        }
    }

    /// Validate an externally drafted narrative against a fresh evaluation
    /// of the same submission.
    pub fn review_narrative(
        &self,
        raw: &Value,
        draft: &NarrativeDraft,
    ) -> Result<NarrativeReview, EvaluationServiceError> {
        let (signals, _) = self.normalizer.normalize(raw)?;
        let outcome = self.engine.evaluate(&signals);
        Ok(review_narrative(
            draft,
            &outcome,
            self.engine.config().narrative_tolerance,
        ))
    }
}

/// Error raised by the evaluation service.
#[derive(Debug, thiserror::Error)]
pub enum EvaluationServiceError {
    #[error(transparent)]
    Normalization(#[from] NormalizationError),
}
