use serde::Serialize;

use super::domain::{
    CompanyTier, DesignExposure, PortfolioActivity, PracticeLevel, SignalSet, TechFocus,
};
use super::engine::SeniorityTier;
use super::jobs::infer_focus;

const MIN_PLAN_MONTHS: u8 = 2;
const MAX_PLAN_MONTHS: u8 = 12;

/// Seniority rung the transition plan aims at. Junior only appears on the
/// faster alternate path; stated targets resolve to mid or senior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TargetLevel {
    Junior,
    Mid,
    Senior,
}

impl TargetLevel {
    fn from_signals(signals: &SignalSet) -> Self {
        if signals.target_role.senior_intent() {
            TargetLevel::Senior
        } else {
            TargetLevel::Mid
        }
    }

    fn required_practice(self) -> PracticeLevel {
        match self {
            TargetLevel::Junior => PracticeLevel::Moderate,
            TargetLevel::Mid | TargetLevel::Senior => PracticeLevel::High,
        }
    }

    fn required_design(self) -> Option<DesignExposure> {
        match self {
            TargetLevel::Junior => None,
            TargetLevel::Mid => Some(DesignExposure::Single),
            TargetLevel::Senior => Some(DesignExposure::Multiple),
        }
    }

    fn required_portfolio(self) -> PortfolioActivity {
        match self {
            TargetLevel::Junior | TargetLevel::Mid => PortfolioActivity::Limited,
            TargetLevel::Senior => PortfolioActivity::Active,
        }
    }

    fn tier(self) -> SeniorityTier {
        match self {
            TargetLevel::Junior => SeniorityTier::Entry,
            TargetLevel::Mid => SeniorityTier::Mid,
            TargetLevel::Senior => SeniorityTier::Senior,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanConfidence {
    High,
    Medium,
}

impl PlanConfidence {
    pub const fn label(self) -> &'static str {
        match self {
            PlanConfidence::High => "high",
            PlanConfidence::Medium => "medium",
        }
    }
}

/// One phase of the plan, bounded to a month range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Milestone {
    pub start_month: u8,
    pub end_month: u8,
    pub description: String,
}

impl Milestone {
    pub fn window(&self) -> String {
        if self.start_month == self.end_month {
            format!("Month {}", self.start_month)
        } else {
            format!("Month {}-{}", self.start_month, self.end_month)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransitionPlan {
    pub min_months: u8,
    pub max_months: u8,
    pub window: String,
    pub confidence: PlanConfidence,
    pub key_gap: String,
    pub milestones: Vec<Milestone>,
}

/// An alternate destination with its own plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RolePath {
    pub title: String,
    pub seniority: SeniorityTier,
    pub reason: String,
    pub timeline: TransitionPlan,
}

struct GapMonths {
    coding: u8,
    design: u8,
    portfolio: u8,
}

impl GapMonths {
    fn total_raw(&self) -> u8 {
        self.coding + self.design + self.portfolio
    }
}

fn coding_gap_months(current: PracticeLevel, level: TargetLevel) -> u8 {
    let distance =
        (level.required_practice() as i8 - current as i8).max(0) as u8;
    match distance {
        0 => 0,
        1 => 2,
        2 => 3,
        _ => 4,
    }
}

// Self-learning counts as no exposure here; only participation closes gaps.
fn design_rung(exposure: DesignExposure) -> i8 {
    match exposure {
        DesignExposure::None | DesignExposure::Learning => 0,
        DesignExposure::Single => 1,
        DesignExposure::Multiple => 2,
    }
}

fn design_gap_months(current: DesignExposure, level: TargetLevel) -> u8 {
    let Some(required) = level.required_design() else {
        return 0;
    };
    let distance = (design_rung(required) - design_rung(current)).max(0);
    match distance {
        0 => 0,
        1 => 3,
        _ => 5,
    }
}

fn portfolio_gap_months(current: PortfolioActivity, level: TargetLevel) -> u8 {
    let distance = (level.required_portfolio() as i8 - current as i8).max(0);
    match distance {
        0 => 0,
        1 => 4,
        2 => 6,
        _ => 8,
    }
}

fn experience_multiplier(signals: &SignalSet) -> f32 {
    [1.3, 1.1, 1.0, 0.9, 0.85][signals.experience as usize]
}

fn company_multiplier(tier: CompanyTier) -> f32 {
    match tier {
        CompanyTier::Faang => 1.5,
        CompanyTier::Unicorn => 1.3,
        CompanyTier::Product => 1.2,
        CompanyTier::Startup => 1.0,
        CompanyTier::Service => 0.8,
        CompanyTier::Any => 1.0,
    }
}

fn key_gap_message(gaps: &GapMonths) -> String {
    if gaps.total_raw() == 0 {
        return "Interview preparation and behavioral practice".to_string();
    }
    // First maximal value wins, in coding, design, portfolio order.
    let mut best = ("Problem-solving practice needed", gaps.coding);
    if gaps.design > best.1 {
        best = ("System design expertise required", gaps.design);
    }
    if gaps.portfolio > best.1 {
        best = ("Build portfolio projects", gaps.portfolio);
    }
    best.0.to_string()
}

fn focus_phrases(focus: TechFocus) -> (&'static str, &'static str) {
    match focus {
        TechFocus::Backend => (
            "REST APIs and database optimization",
            "API-based projects (REST API, microservices)",
        ),
        TechFocus::Frontend => (
            "React components and responsive design",
            "frontend projects (dashboard, SPA)",
        ),
        TechFocus::Fullstack => (
            "full-stack development (MERN stack)",
            "end-to-end projects (frontend + backend + deployment)",
        ),
        TechFocus::Data => (
            "data pipelines and ML model development",
            "data/ML projects (ETL, model training, deployment)",
        ),
        TechFocus::DevOps => (
            "CI/CD pipelines and infrastructure automation",
            "DevOps projects (Docker, Kubernetes, CI/CD)",
        ),
        TechFocus::Architecture => (
            "system design and technical leadership",
            "architecture case studies (design docs, migration plans)",
        ),
    }
}

fn company_context(tier: CompanyTier) -> &'static str {
    match tier {
        CompanyTier::Faang => " for FAANG / Big Tech",
        CompanyTier::Unicorn | CompanyTier::Product => " for product companies",
        CompanyTier::Startup => " for high-growth startups",
        CompanyTier::Service => " for service companies",
        CompanyTier::Any => "",
    }
}

fn practice_phase_text(current: PracticeLevel, gap: u8) -> &'static str {
    match current {
        PracticeLevel::None => {
            if gap >= 3 {
                "Master coding fundamentals (reach 100+ problems)"
            } else {
                "Build coding foundation (solve 50-100 problems)"
            }
        }
        PracticeLevel::Low => {
            if gap >= 3 {
                "Build strong foundation (reach 100+ problems)"
            } else {
                "Strengthen problem-solving (reach 50-100 problems)"
            }
        }
        PracticeLevel::Moderate => "Master advanced patterns (solve 100+ problems)",
        PracticeLevel::High => "Maintain sharp problem-solving (focus on hard problems)",
    }
}

fn build_milestones(
    signals: &SignalSet,
    gaps: &GapMonths,
    max_months: u8,
    focus: TechFocus,
) -> Vec<Milestone> {
    let (role_focus, role_projects) = focus_phrases(focus);
    let context = company_context(signals.target_company);
    let mut milestones = Vec::new();

    // The opening phase always speaks to the current practice bucket, a
    // maintain/advance phase when there is no gap to close.
    let practice_span = gaps.coding.max(1);
    milestones.push(Milestone {
        start_month: 1,
        end_month: practice_span,
        description: practice_phase_text(signals.coding_practice, gaps.coding).to_string(),
    });

    let mut current_month = practice_span + 1;

    if gaps.portfolio > 0 && gaps.design > 0 {
        let overlap = gaps.portfolio.max(gaps.design);
        let count = if gaps.portfolio <= 2 { "2" } else { "3" };
        milestones.push(Milestone {
            start_month: current_month,
            end_month: current_month + overlap - 1,
            description: format!("Build {count} {role_projects} + learn system design patterns"),
        });
        current_month += overlap;
    } else if gaps.portfolio > 0 {
        let count = if gaps.portfolio <= 2 { "2" } else { "3-5" };
        milestones.push(Milestone {
            start_month: current_month,
            end_month: current_month + gaps.portfolio - 1,
            description: format!("Build {count} {role_projects}"),
        });
        current_month += gaps.portfolio;
    } else if gaps.design > 0 {
        milestones.push(Milestone {
            start_month: current_month,
            end_month: current_month + gaps.design - 1,
            description: format!("Master system design focused on {role_focus}"),
        });
        current_month += gaps.design;
    }

    if max_months > current_month {
        milestones.push(Milestone {
            start_month: current_month,
            end_month: max_months,
            description: format!(
                "Practice {role_focus} interview questions{context} + mock interviews"
            ),
        });
    }

    milestones
}

fn plan_for_level(signals: &SignalSet, level: TargetLevel) -> TransitionPlan {
    let gaps = GapMonths {
        coding: coding_gap_months(signals.coding_practice, level),
        design: design_gap_months(signals.design_exposure, level),
        portfolio: portfolio_gap_months(signals.portfolio, level),
    };

    // Design and portfolio work overlaps once the coding foundation exists.
    let overlap_months = if gaps.design > 0 && gaps.portfolio > 0 {
        gaps.design.max(gaps.portfolio)
    } else {
        gaps.design + gaps.portfolio
    };
    let base_months = gaps.coding + overlap_months + 1;

    let adjusted = (f32::from(base_months)
        * experience_multiplier(signals)
        * company_multiplier(signals.target_company)) as u8;
    let adjusted = adjusted.clamp(MIN_PLAN_MONTHS, MAX_PLAN_MONTHS);

    let min_months = (adjusted.saturating_sub(1)).max(MIN_PLAN_MONTHS);
    let max_months = (adjusted + 1).min(MAX_PLAN_MONTHS);

    let confidence = if gaps.total_raw() <= 4 {
        PlanConfidence::High
    } else {
        PlanConfidence::Medium
    };

    let milestones = build_milestones(signals, &gaps, max_months, infer_focus(signals));

    TransitionPlan {
        min_months,
        max_months,
        window: plan_window(min_months, max_months),
        confidence,
        key_gap: key_gap_message(&gaps),
        milestones,
    }
}

fn plan_window(min_months: u8, max_months: u8) -> String {
    if min_months == max_months {
        format!("{min_months} months")
    } else {
        format!("{min_months}-{max_months} months")
    }
}

/// Plan toward the stated target role.
pub(crate) fn plan_transition(signals: &SignalSet) -> TransitionPlan {
    plan_for_level(signals, TargetLevel::from_signals(signals))
}

fn shrink_plan(mut plan: TransitionPlan, by: u8) -> TransitionPlan {
    plan.min_months = plan.min_months.saturating_sub(by).max(MIN_PLAN_MONTHS);
    plan.max_months = plan.max_months.saturating_sub(by).max(3);
    plan.window = plan_window(plan.min_months, plan.max_months);
    plan
}

fn alternative_focus(focus: TechFocus) -> TechFocus {
    match focus {
        TechFocus::Fullstack | TechFocus::DevOps => TechFocus::Backend,
        _ => TechFocus::Fullstack,
    }
}

/// A faster path one rung down plus an adjacent specialization at the same
/// rung.
pub(crate) fn alternate_paths(signals: &SignalSet) -> Vec<RolePath> {
    let level = TargetLevel::from_signals(signals);

    let faster = match level {
        TargetLevel::Senior => RolePath {
            title: "Mid-Level Software Engineer".to_string(),
            seniority: SeniorityTier::Mid,
            reason: "One level down with a lower bar and faster hiring loops".to_string(),
            timeline: shrink_plan(plan_for_level(signals, TargetLevel::Mid), 2),
        },
        TargetLevel::Mid | TargetLevel::Junior => RolePath {
            title: "Junior Software Engineer".to_string(),
            seniority: SeniorityTier::Entry,
            reason: "One level down with a lower bar and faster hiring loops".to_string(),
            timeline: shrink_plan(plan_for_level(signals, TargetLevel::Junior), 1),
        },
    };

    let swapped = alternative_focus(infer_focus(signals));
    let alternative_title = match level {
        TargetLevel::Senior => format!("Senior {}", swapped.label()),
        TargetLevel::Mid | TargetLevel::Junior => swapped.label().to_string(),
    };
    let mut alternative_plan = plan_for_level(signals, level);
    alternative_plan.min_months = alternative_plan
        .min_months
        .saturating_sub(1)
        .max(MIN_PLAN_MONTHS);
    alternative_plan.max_months = alternative_plan.max_months.max(3);
    alternative_plan.window = plan_window(alternative_plan.min_months, alternative_plan.max_months);
    alternative_plan.key_gap = "Learn additional tech stack".to_string();

    let alternative = RolePath {
        title: alternative_title,
        seniority: level.tier(),
        reason: "Adjacent specialization that reuses most of your current stack".to_string(),
        timeline: alternative_plan,
    };

    vec![faster, alternative]
}
