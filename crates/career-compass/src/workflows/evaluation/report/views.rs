use serde::{Deserialize, Serialize};

use super::super::engine::{ContradictionSummary, ScoreComponent, SeniorityTier};
use super::super::jobs::JobPosting;
use super::super::normalize::NormalizationNote;
use super::super::quick_wins::ActionItem;
use super::super::timeline::{RolePath, TransitionPlan};
use super::super::tools::ToolSuggestion;

/// Display band for the final readiness score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreStatus {
    Excellent,
    Good,
    Average,
    NeedsImprovement,
}

impl ScoreStatus {
    pub const fn from_score(score: i16) -> Self {
        if score >= 85 {
            Self::Excellent
        } else if score >= 70 {
            Self::Good
        } else if score >= 50 {
            Self::Average
        } else {
            Self::NeedsImprovement
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Average => "Average",
            Self::NeedsImprovement => "Needs Improvement",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SeniorityView {
    pub tier: SeniorityTier,
    pub tier_label: &'static str,
    pub matching_tier: SeniorityTier,
    pub matching_tier_label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct KeyStat {
    pub label: &'static str,
    pub value: String,
    pub icon: &'static str,
}

/// One-paragraph restatement of the submitted signals in display form.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileSummary {
    pub summary: String,
    pub key_stats: Vec<KeyStat>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PeerStanding {
    TopPerformer,
    AboveAverage,
    Average,
    BelowAverage,
}

impl PeerStanding {
    pub const fn from_percentile(percentile: u8) -> Self {
        if percentile >= 90 {
            Self::TopPerformer
        } else if percentile >= 70 {
            Self::AboveAverage
        } else if percentile >= 40 {
            Self::Average
        } else {
            Self::BelowAverage
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::TopPerformer => "Top Performer",
            Self::AboveAverage => "Above Average",
            Self::Average => "Average",
            Self::BelowAverage => "Below Average",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PeerComparison {
    pub percentile: u8,
    pub potential_percentile: u8,
    pub peer_group: String,
    pub standing: PeerStanding,
    pub standing_label: &'static str,
}

/// Display labels for every normalized signal, for prose that quotes them.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SignalLabels {
    pub experience: &'static str,
    pub current_role: &'static str,
    pub coding_practice: &'static str,
    pub system_design: &'static str,
    pub portfolio: &'static str,
    pub target_role: &'static str,
    pub target_company: &'static str,
}

/// The facts a downstream text generator is allowed to reference.
#[derive(Debug, Clone, Serialize)]
pub struct NarrativeContext {
    pub final_score: i16,
    pub tolerance: i16,
    pub tier_label: &'static str,
    pub matching_tier_label: &'static str,
    pub signals: SignalLabels,
    pub strengths: Vec<String>,
    pub development_areas: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub caveats: Vec<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub defaulted_fields: Vec<&'static str>,
}

/// Claims extracted from an externally generated prose draft.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NarrativeDraft {
    #[serde(default)]
    pub stated_score: Option<i16>,
    #[serde(default)]
    pub stated_tier: Option<SeniorityTier>,
    #[serde(default)]
    pub stated_percentages: Vec<i16>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NarrativeReview {
    pub accepted: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub breaches: Vec<String>,
}

/// The complete evaluation response, serialized in a fixed field order.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationBundle {
    pub final_score: i16,
    pub score_status: ScoreStatus,
    pub score_status_label: &'static str,
    pub seniority: SeniorityView,
    pub contradictions: ContradictionSummary,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub normalization_notes: Vec<NormalizationNote>,
    pub score_components: Vec<ScoreComponent>,
    pub openings: Vec<JobPosting>,
    pub quick_wins: Vec<ActionItem>,
    pub tools: Vec<ToolSuggestion>,
    pub timeline: TransitionPlan,
    pub alternate_paths: Vec<RolePath>,
    pub profile: ProfileSummary,
    pub peers: PeerComparison,
    pub narrative: NarrativeContext,
}
