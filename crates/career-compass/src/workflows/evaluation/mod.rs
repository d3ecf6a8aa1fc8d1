//! Career readiness evaluation pipeline.
//!
//! A raw questionnaire submission flows through signal normalization, the
//! deterministic scoring engine, and a set of synthesizers (job matching,
//! quick wins, tools, timeline, narrative context) before being assembled
//! into a single [`RecommendationBundle`].

pub mod blueprint;
pub mod domain;
pub mod engine;
pub(crate) mod jobs;
pub(crate) mod normalize;
pub(crate) mod quick_wins;
pub mod report;
pub mod router;
pub mod service;
pub(crate) mod timeline;
pub(crate) mod tools;

#[cfg(test)]
mod tests;

pub use blueprint::{
    JobTemplate, RecommendationBlueprint, TemplateLevel, ToolEntry, ToolShelf, TOOL_DENYLIST,
};
pub use domain::{
    CompanyTier, DesignExposure, ExperienceBand, PortfolioActivity, PracticeLevel, RoleContext,
    ScoreFactor, SignalField, SignalSet, TargetRole, TechFocus,
};
pub use engine::{
    ContradictionRule, ContradictionSummary, ContradictionWeights, ScoreComponent, ScoreOutcome,
    ScoringConfig, ScoringEngine, SeniorityAssessment, SeniorityTier,
};
pub use jobs::JobPosting;
pub use normalize::{NormalizationError, NormalizationNote, SignalNormalizer};
pub use quick_wins::ActionItem;
pub use report::views::{
    KeyStat, NarrativeContext, NarrativeDraft, NarrativeReview, PeerComparison, PeerStanding,
    ProfileSummary, RecommendationBundle, ScoreStatus, SeniorityView, SignalLabels,
};
pub use router::{evaluation_router, NarrativeReviewRequest};
pub use service::{EvaluationService, EvaluationServiceError};
pub use timeline::{Milestone, PlanConfidence, RolePath, TransitionPlan};
pub use tools::ToolSuggestion;
