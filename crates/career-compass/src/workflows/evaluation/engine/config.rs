use serde::{Deserialize, Serialize};

use super::super::domain::{
    DesignExposure, ExperienceBand, PortfolioActivity, PracticeLevel, RoleContext,
};

/// Penalty weights for each contradiction rule plus the shared cap that
/// bounds how much flags may drag a score down in aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContradictionWeights {
    pub design_without_practice: i16,
    pub unprepared_senior: i16,
    pub untested_portfolio: i16,
    pub entry_design_claim: i16,
    pub penalty_cap: i16,
}

/// Rubric configuration describing the scoring weights and thresholds.
///
/// Index tables line up with enum ordinals: `experience_points[0]` is the
/// no-experience band, `practice_points[3]` the heaviest practice bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub experience_points: [i16; 5],
    pub role_quality: [f32; 5],
    pub senior_design_points: [i16; 4],
    pub junior_design_points: [i16; 4],
    pub practice_points: [i16; 4],
    pub practice_cap: i16,
    pub portfolio_points: [i16; 4],
    pub contradiction_weights: ContradictionWeights,
    pub score_floor: i16,
    pub score_ceiling: i16,
    pub jitter_span: i16,
    pub senior_promotion_score: i16,
    pub staff_promotion_score: i16,
    pub narrative_tolerance: i16,
}

impl ScoringConfig {
    /// The production rubric. Tuned so a fully loaded profile lands at the
    /// ceiling and an empty one at the floor.
    pub fn standard() -> Self {
        Self {
            experience_points: [0, 18, 24, 30, 35],
            role_quality: [1.0, 1.0, 1.0, 0.90, 0.95],
            senior_design_points: [5, 15, 25, 40],
            junior_design_points: [5, 8, 12, 15],
            practice_points: [3, 8, 12, 15],
            practice_cap: 15,
            portfolio_points: [0, 5, 10, 15],
            contradiction_weights: ContradictionWeights {
                design_without_practice: 6,
                unprepared_senior: 4,
                untested_portfolio: 3,
                entry_design_claim: 8,
                penalty_cap: 15,
            },
            score_floor: 45,
            score_ceiling: 100,
            jitter_span: 3,
            // A mid-band profile tops out in the high sixties, so the
            // promotion bar sits just under that ceiling.
            senior_promotion_score: 65,
            staff_promotion_score: 85,
            narrative_tolerance: 10,
        }
    }

    pub fn points_for_experience(&self, band: ExperienceBand) -> i16 {
        self.experience_points[band as usize]
    }

    pub fn quality_for_role(&self, role: RoleContext) -> f32 {
        self.role_quality[role as usize]
    }

    /// Design exposure pays out on two scales: candidates already in the
    /// senior bands earn architecture-weighted points, everyone else earns
    /// the junior scale.
    pub fn points_for_design(&self, exposure: DesignExposure, band: ExperienceBand) -> i16 {
        if band >= ExperienceBand::Senior {
            self.senior_design_points[exposure as usize]
        } else {
            self.junior_design_points[exposure as usize]
        }
    }

    pub fn points_for_practice(&self, level: PracticeLevel) -> i16 {
        self.practice_points[level as usize].min(self.practice_cap)
    }

    pub fn points_for_portfolio(&self, activity: PortfolioActivity) -> i16 {
        self.portfolio_points[activity as usize]
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self::standard()
    }
}
