use super::super::domain::{
    CompanyTier, DesignExposure, ExperienceBand, PortfolioActivity, PracticeLevel, RoleContext,
    SignalSet, TargetRole,
};
use super::views::{KeyStat, PeerComparison, PeerStanding, ProfileSummary};

const PERCENTILE_FLOOR: i16 = 35;
const PERCENTILE_CEILING: i16 = 88;
const POTENTIAL_CEILING: i16 = 90;
const POTENTIAL_HEADROOM: i16 = 12;

fn experience_phrase(band: ExperienceBand) -> &'static str {
    match band {
        ExperienceBand::None => "no professional experience",
        ExperienceBand::Junior => "0-2 years of experience",
        ExperienceBand::Mid => "3-5 years of experience",
        ExperienceBand::Senior => "5-8 years of experience",
        ExperienceBand::Staff => "8+ years of experience",
    }
}

fn role_phrase(context: RoleContext) -> &'static str {
    match context {
        RoleContext::Product => "software engineer at a product company",
        RoleContext::Service => "software engineer at a service company",
        RoleContext::InfraOps => "devops engineer",
        RoleContext::QaSupport => "qa/support engineer",
        RoleContext::NonTechnical => "career switcher",
    }
}

fn practice_phrase(level: PracticeLevel) -> &'static str {
    match level {
        PracticeLevel::None => "minimal coding practice (0-10 problems solved)",
        PracticeLevel::Low => "some coding practice (11-50 problems solved)",
        PracticeLevel::Moderate => "moderate coding practice (51-100 problems solved)",
        PracticeLevel::High => "extensive coding practice (100+ problems solved)",
    }
}

fn design_phrase(exposure: DesignExposure) -> &'static str {
    match exposure {
        DesignExposure::None => "no system design experience",
        DesignExposure::Learning => "learning system design concepts",
        DesignExposure::Single => "participated in system design discussions",
        DesignExposure::Multiple => "led multiple system design discussions",
    }
}

fn portfolio_phrase(activity: PortfolioActivity) -> &'static str {
    match activity {
        PortfolioActivity::None => "no portfolio projects",
        PortfolioActivity::Inactive => "some inactive portfolio projects",
        PortfolioActivity::Limited => "1-5 portfolio projects",
        PortfolioActivity::Active => "5+ active portfolio projects",
    }
}

fn practice_stat(level: PracticeLevel) -> &'static str {
    match level {
        PracticeLevel::None => "0-10 problems",
        PracticeLevel::Low => "11-50 problems",
        PracticeLevel::Moderate => "51-100 problems",
        PracticeLevel::High => "100+ problems",
    }
}

fn design_stat(exposure: DesignExposure) -> &'static str {
    match exposure {
        DesignExposure::None => "Not Yet",
        DesignExposure::Learning => "Learning",
        DesignExposure::Single => "Participated",
        DesignExposure::Multiple => "Extensive",
    }
}

fn portfolio_stat(activity: PortfolioActivity) -> &'static str {
    match activity {
        PortfolioActivity::None => "None",
        PortfolioActivity::Inactive => "Inactive",
        PortfolioActivity::Limited => "1-5 Projects",
        PortfolioActivity::Active => "5+ Active Projects",
    }
}

/// Restates the submitted signals as one conversational paragraph plus stats.
pub(crate) fn summarize_profile(signals: &SignalSet) -> ProfileSummary {
    let role = role_phrase(signals.role_context);
    let experience = experience_phrase(signals.experience);
    let practice = practice_phrase(signals.coding_practice);
    let design = design_phrase(signals.design_exposure);
    let portfolio = portfolio_phrase(signals.portfolio);

    let summary = match signals.experience {
        ExperienceBand::None | ExperienceBand::Junior => format!(
            "You're currently a {} with {}. You have {} and {}. Your portfolio includes {}.",
            role, experience, practice, design, portfolio
        ),
        ExperienceBand::Mid => format!(
            "You're a {} with {}. You've completed {}, {}, and have {}.",
            role, experience, practice, design, portfolio
        ),
        ExperienceBand::Senior | ExperienceBand::Staff => format!(
            "You're an experienced {} with {}. You have {}, {}, and maintain {}.",
            role, experience, practice, design, portfolio
        ),
    };

    let key_stats = vec![
        KeyStat {
            label: "Experience",
            value: experience_phrase(signals.experience).to_string(),
            icon: "briefcase",
        },
        KeyStat {
            label: "Coding Practice",
            value: practice_stat(signals.coding_practice).to_string(),
            icon: "code",
        },
        KeyStat {
            label: "System Design",
            value: design_stat(signals.design_exposure).to_string(),
            icon: "layout",
        },
        KeyStat {
            label: "Portfolio",
            value: portfolio_stat(signals.portfolio).to_string(),
            icon: "folder",
        },
    ];

    ProfileSummary { summary, key_stats }
}

fn seniority_description(band: ExperienceBand) -> &'static str {
    match band {
        ExperienceBand::Staff => "Senior",
        ExperienceBand::Senior => "Mid to Senior-level",
        ExperienceBand::Mid => "Mid-level",
        ExperienceBand::None | ExperienceBand::Junior => "Junior to Mid-level",
    }
}

fn peer_group(signals: &SignalSet) -> String {
    let role = match signals.target_role {
        TargetRole::Exploring => "Software Engineer",
        role => role.label(),
    };
    let company = match signals.target_company {
        CompanyTier::Any => "tech companies",
        tier => tier.label(),
    };
    format!(
        "{} {}s at {}",
        seniority_description(signals.experience),
        role,
        company
    )
}

/// Places the final score in a peer percentile and estimates the headroom
/// left once the flagged gaps are closed.
pub(crate) fn compare_with_peers(signals: &SignalSet, final_score: i16) -> PeerComparison {
    let percentile = (final_score - 10).clamp(PERCENTILE_FLOOR, PERCENTILE_CEILING);

    let mut potential = percentile;
    potential += match signals.coding_practice {
        PracticeLevel::None => 20,
        PracticeLevel::Low => 12,
        PracticeLevel::Moderate => 5,
        PracticeLevel::High => 0,
    };
    if signals.experience >= ExperienceBand::Mid {
        potential += match signals.design_exposure {
            DesignExposure::None => 15,
            DesignExposure::Learning => 10,
            DesignExposure::Single => 5,
            DesignExposure::Multiple => 0,
        };
    }
    potential += match signals.portfolio {
        PortfolioActivity::None => 10,
        PortfolioActivity::Inactive => 7,
        PortfolioActivity::Limited => 3,
        PortfolioActivity::Active => 0,
    };
    potential = potential.min(POTENTIAL_CEILING);
    potential = potential.max(percentile + POTENTIAL_HEADROOM);
    potential = potential.min(POTENTIAL_CEILING);

    let standing = PeerStanding::from_percentile(percentile as u8);
    PeerComparison {
        percentile: percentile as u8,
        potential_percentile: potential as u8,
        peer_group: peer_group(signals),
        standing,
        standing_label: standing.label(),
    }
}
