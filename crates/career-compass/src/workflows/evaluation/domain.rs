use serde::{Deserialize, Serialize};

/// Self-reported professional experience bracket.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceBand {
    None,
    Junior,
    Mid,
    Senior,
    Staff,
}

impl ExperienceBand {
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "0 years",
            Self::Junior => "0-2 years",
            Self::Mid => "3-5 years",
            Self::Senior => "5-8 years",
            Self::Staff => "8+ years",
        }
    }

    pub(crate) fn from_raw(value: &str) -> Option<Self> {
        match value {
            "0" | "none" | "fresh-grad" => Some(Self::None),
            "0-2" | "junior" => Some(Self::Junior),
            "3-5" | "mid" => Some(Self::Mid),
            "5-8" | "5+" | "senior" => Some(Self::Senior),
            "8+" | "staff" => Some(Self::Staff),
            _ => None,
        }
    }

    pub const fn all() -> [Self; 5] {
        [Self::None, Self::Junior, Self::Mid, Self::Senior, Self::Staff]
    }
}

/// Kind of engineering environment the candidate currently works in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleContext {
    Product,
    Service,
    InfraOps,
    QaSupport,
    NonTechnical,
}

impl RoleContext {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Product => "Software Engineer (Product Company)",
            Self::Service => "Software Engineer (Service Company)",
            Self::InfraOps => "DevOps / Cloud Engineer",
            Self::QaSupport => "QA / Support Engineer",
            Self::NonTechnical => "Non-Technical Background",
        }
    }

    pub(crate) fn from_raw(value: &str) -> Option<Self> {
        match value {
            "swe-product" | "product" => Some(Self::Product),
            "swe-service" | "service" => Some(Self::Service),
            "devops" | "infra-ops" | "sre" | "cloud" => Some(Self::InfraOps),
            "qa-support" | "qa" | "support" => Some(Self::QaSupport),
            "non-tech" | "non-technical" | "sales-marketing" | "operations" | "design"
            | "finance" | "career-switcher" | "other" => Some(Self::NonTechnical),
            _ => None,
        }
    }

    pub const fn all() -> [Self; 5] {
        [
            Self::Product,
            Self::Service,
            Self::InfraOps,
            Self::QaSupport,
            Self::NonTechnical,
        ]
    }
}

/// Recent problem-solving volume, bucketed by problems solved.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PracticeLevel {
    None,
    Low,
    Moderate,
    High,
}

impl PracticeLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "0-10 problems solved",
            Self::Low => "11-50 problems solved",
            Self::Moderate => "51-100 problems solved",
            Self::High => "100+ problems solved",
        }
    }

    pub(crate) fn from_raw(value: &str) -> Option<Self> {
        match value {
            "0-10" | "none" => Some(Self::None),
            "11-50" | "low" => Some(Self::Low),
            "51-100" | "moderate" => Some(Self::Moderate),
            "100+" | "high" => Some(Self::High),
            _ => None,
        }
    }

    pub const fn all() -> [Self; 4] {
        [Self::None, Self::Low, Self::Moderate, Self::High]
    }
}

/// Depth of exposure to system design work.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum DesignExposure {
    None,
    Learning,
    Single,
    Multiple,
}

impl DesignExposure {
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "Not yet",
            Self::Learning => "Self-learning",
            Self::Single => "Participated once",
            Self::Multiple => "Led multiple discussions",
        }
    }

    pub(crate) fn from_raw(value: &str) -> Option<Self> {
        match value {
            "not-yet" | "none" => Some(Self::None),
            "learning" | "self-learning" => Some(Self::Learning),
            "once" | "single" | "participated" => Some(Self::Single),
            "multiple" | "led-multiple" => Some(Self::Multiple),
            _ => None,
        }
    }

    pub const fn all() -> [Self; 4] {
        [Self::None, Self::Learning, Self::Single, Self::Multiple]
    }
}

/// Public portfolio activity, bucketed by repository count and recency.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PortfolioActivity {
    None,
    Inactive,
    Limited,
    Active,
}

impl PortfolioActivity {
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "No portfolio",
            Self::Inactive => "Inactive portfolio",
            Self::Limited => "1-5 repositories",
            Self::Active => "5+ active repositories",
        }
    }

    pub(crate) fn from_raw(value: &str) -> Option<Self> {
        match value {
            "none" | "no-portfolio" => Some(Self::None),
            "inactive" => Some(Self::Inactive),
            "limited-1-5" | "limited" => Some(Self::Limited),
            "active-5+" | "active" => Some(Self::Active),
            _ => None,
        }
    }

    pub const fn all() -> [Self; 4] {
        [Self::None, Self::Inactive, Self::Limited, Self::Active]
    }
}

/// Role the candidate wants to move into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetRole {
    Backend,
    Fullstack,
    Frontend,
    DataMl,
    SeniorBackend,
    SeniorFullstack,
    TechLead,
    Exploring,
}

impl TargetRole {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Backend => "Backend Engineer",
            Self::Fullstack => "Full-Stack Engineer",
            Self::Frontend => "Frontend Engineer",
            Self::DataMl => "Data / ML Engineer",
            Self::SeniorBackend => "Senior Backend Engineer",
            Self::SeniorFullstack => "Senior Full-Stack Engineer",
            Self::TechLead => "Tech Lead",
            Self::Exploring => "Still exploring",
        }
    }

    /// True when the stated goal is already a senior-level role.
    pub const fn senior_intent(self) -> bool {
        matches!(self, Self::SeniorBackend | Self::SeniorFullstack | Self::TechLead)
    }

    pub(crate) fn from_raw(value: &str) -> Option<Self> {
        match value {
            "backend-sde" | "backend" | "backend-dev" => Some(Self::Backend),
            "fullstack-sde" | "fullstack" | "full-stack" => Some(Self::Fullstack),
            "frontend-sde" | "frontend" => Some(Self::Frontend),
            "data-ml" | "data-engineer" | "ml-engineer" | "data" => Some(Self::DataMl),
            "senior-backend" => Some(Self::SeniorBackend),
            "senior-fullstack" => Some(Self::SeniorFullstack),
            "tech-lead" | "staff-engineer" => Some(Self::TechLead),
            "not-sure" | "exploring" => Some(Self::Exploring),
            _ => None,
        }
    }
}

/// Company segment the candidate is aiming for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompanyTier {
    Faang,
    Unicorn,
    Startup,
    Product,
    Service,
    Any,
}

impl CompanyTier {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Faang => "FAANG / Big Tech",
            Self::Unicorn => "Product Unicorns / Scaleups",
            Self::Startup => "High Growth Startups",
            Self::Product => "Product Companies",
            Self::Service => "Service Companies",
            Self::Any => "All Company Types",
        }
    }

    pub(crate) fn from_raw(value: &str) -> Option<Self> {
        match value {
            "faang" | "big-tech" | "faang-longterm" => Some(Self::Faang),
            "unicorns" | "unicorn" => Some(Self::Unicorn),
            "startups" | "startup" => Some(Self::Startup),
            "product" => Some(Self::Product),
            "better-service" | "service" => Some(Self::Service),
            "evaluating" | "any-tech" | "any" | "not-sure" => Some(Self::Any),
            _ => None,
        }
    }
}

/// Technical specialization used to key job and tool templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TechFocus {
    Backend,
    Frontend,
    Fullstack,
    Data,
    DevOps,
    Architecture,
}

impl TechFocus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Backend => "Backend Engineer",
            Self::Frontend => "Frontend Engineer",
            Self::Fullstack => "Full-Stack Engineer",
            Self::Data => "Data / ML Engineer",
            Self::DevOps => "DevOps Engineer",
            Self::Architecture => "Software Architect",
        }
    }
}

/// The normalized, typed collection of every questionnaire signal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SignalSet {
    pub experience: ExperienceBand,
    pub role_context: RoleContext,
    pub coding_practice: PracticeLevel,
    pub design_exposure: DesignExposure,
    pub portfolio: PortfolioActivity,
    pub target_role: TargetRole,
    pub target_company: CompanyTier,
}

/// Names a signal family for normalization notes and score components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalField {
    Experience,
    RoleContext,
    CodingPractice,
    DesignExposure,
    Portfolio,
    TargetRole,
    TargetCompany,
}

impl SignalField {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Experience => "experience",
            Self::RoleContext => "role_context",
            Self::CodingPractice => "coding_practice",
            Self::DesignExposure => "design_exposure",
            Self::Portfolio => "portfolio",
            Self::TargetRole => "target_role",
            Self::TargetCompany => "target_company",
        }
    }
}

/// Factors permitted to contribute points to the readiness score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    Experience,
    DesignExposure,
    CodingPractice,
    Portfolio,
    ContradictionPenalty,
}
