use serde::Serialize;

use super::domain::{
    CompanyTier, DesignExposure, ExperienceBand, PortfolioActivity, PracticeLevel, SignalSet,
};

const MIN_ITEMS: usize = 3;
const MAX_ITEMS: usize = 5;

/// Prioritized next step. Priority bands: 90-100 critical, 70-89 high,
/// 50-69 medium, 30-49 low.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionItem {
    pub title: String,
    pub description: String,
    pub icon: &'static str,
    pub priority: u8,
}

fn practice_item(signals: &SignalSet) -> Option<ActionItem> {
    let band = signals.experience;
    match signals.coding_practice {
        PracticeLevel::None if band >= ExperienceBand::Senior => Some(ActionItem {
            title: "Refresh Interview Skills".to_string(),
            description: format!(
                "Your {} building production systems are valuable. Refresh interview skills \
                 with 30 easy and 50 medium problems over 6-8 weeks.",
                band.label()
            ),
            icon: "trophy",
            priority: 100,
        }),
        PracticeLevel::None if band == ExperienceBand::Mid => Some(ActionItem {
            title: "Strengthen Interview Prep".to_string(),
            description: "Your 3-5 years of professional experience are valuable. Focus \
                          interview prep on 50-100 problems to unlock senior opportunities."
                .to_string(),
            icon: "trophy",
            priority: 100,
        }),
        PracticeLevel::None => Some(ActionItem {
            title: "Build Coding Foundation".to_string(),
            description: "Solve 20 easy array and string problems to build pattern recognition."
                .to_string(),
            icon: "code",
            priority: 100,
        }),
        PracticeLevel::Low => Some(ActionItem {
            title: "Strengthen Problem Solving".to_string(),
            description: "Solve 30 medium problems focusing on trees, graphs, and dynamic \
                          programming."
                .to_string(),
            icon: "trophy",
            priority: 100,
        }),
        PracticeLevel::Moderate => {
            let senior_target =
                signals.target_role.senior_intent() || band >= ExperienceBand::Senior;
            Some(ActionItem {
                title: "Master Advanced Patterns".to_string(),
                description: "Solve 20 hard problems and enter two weekly coding contests."
                    .to_string(),
                icon: "trophy",
                priority: if senior_target { 95 } else { 90 },
            })
        }
        PracticeLevel::High => None,
    }
}

fn design_item(signals: &SignalSet) -> Option<ActionItem> {
    // Already leading design discussions, nothing left to start.
    if signals.design_exposure == DesignExposure::Multiple
        || signals.experience <= ExperienceBand::Junior
    {
        return None;
    }

    let priority = if signals.experience >= ExperienceBand::Senior {
        95
    } else {
        90
    };

    if signals.design_exposure <= DesignExposure::Learning {
        Some(ActionItem {
            title: "Start System Design Prep".to_string(),
            description: "Read 'Designing Data-Intensive Applications' and design one system \
                          end to end (URL shortener, chat app)."
                .to_string(),
            icon: "books",
            priority,
        })
    } else {
        Some(ActionItem {
            title: "Deep Dive System Design".to_string(),
            description: "Study five real-world architectures (Netflix, Uber, Instagram) and \
                          focus on trade-offs and scalability."
                .to_string(),
            icon: "books",
            priority,
        })
    }
}

fn portfolio_item(signals: &SignalSet) -> Option<ActionItem> {
    match signals.portfolio {
        PortfolioActivity::Active => None,
        PortfolioActivity::Limited => Some(ActionItem {
            title: "Expand Portfolio Quality".to_string(),
            description: "Add READMEs, tests, and CI to existing projects. Host one project \
                          live."
                .to_string(),
            icon: "rocket",
            priority: 70,
        }),
        PortfolioActivity::None | PortfolioActivity::Inactive => Some(ActionItem {
            title: "Build Portfolio Presence".to_string(),
            description: "Publish 3-5 well-documented projects from your recent work, each \
                          with a README and a live demo."
                .to_string(),
            icon: "rocket",
            priority: 75,
        }),
    }
}

fn fallback_items(signals: &SignalSet) -> Vec<ActionItem> {
    let mut items = Vec::new();

    if signals.experience <= ExperienceBand::Junior {
        items.push(ActionItem {
            title: "Practice Coding Regularly".to_string(),
            description: "Set aside one hour daily for coding practice. Consistency beats \
                          intensity."
                .to_string(),
            icon: "code",
            priority: 50,
        });
    } else if signals.experience >= ExperienceBand::Senior {
        items.push(ActionItem {
            title: "Document System Design Decisions".to_string(),
            description: "Write 2-3 design docs for systems you have built. Practice \
                          explaining trade-offs."
                .to_string(),
            icon: "books",
            priority: 50,
        });
    }

    items.push(ActionItem {
        title: "Prepare for Behavioral Interviews".to_string(),
        description: "Use the STAR method to prepare five stories showcasing leadership, \
                      problem solving, and teamwork."
            .to_string(),
        icon: "trophy",
        priority: 45,
    });
    items.push(ActionItem {
        title: "Update Your Resume".to_string(),
        description: "Quantify achievements (reduced load time by 40%, handled 10K+ users) \
                      and use action verbs."
            .to_string(),
        icon: "certificate",
        priority: 40,
    });

    items
}

/// Builds the 3-5 highest-impact next steps for this profile.
pub(crate) fn plan_quick_wins(signals: &SignalSet) -> Vec<ActionItem> {
    let mut wins = Vec::new();

    if let Some(item) = practice_item(signals) {
        wins.push(item);
    }
    if let Some(item) = design_item(signals) {
        wins.push(item);
    }

    if signals.design_exposure >= DesignExposure::Single
        && signals.coding_practice >= PracticeLevel::Moderate
    {
        wins.push(ActionItem {
            title: "Schedule Mock Interviews".to_string(),
            description: "Book 3-5 mock interviews (Pramp, Interviewing.io) to practice \
                          articulating your experience and design thinking."
                .to_string(),
            icon: "trophy",
            priority: 92,
        });
    }

    if signals.experience >= ExperienceBand::Senior {
        wins.push(ActionItem {
            title: "Prepare Leadership Stories".to_string(),
            description: "Document 5-7 STAR stories showcasing impact, leadership, and \
                          problem solving from your career. Quantify results."
                .to_string(),
            icon: "certificate",
            priority: 90,
        });
    }

    if matches!(
        signals.target_company,
        CompanyTier::Faang | CompanyTier::Unicorn
    ) {
        wins.push(ActionItem {
            title: "Research Target Companies".to_string(),
            description: "Deep-dive into 3-5 target companies' tech stacks, culture, and \
                          recent engineering blogs. Prepare specific questions."
                .to_string(),
            icon: "lightbulb",
            priority: 88,
        });
    }

    if signals.target_role.senior_intent() && signals.experience <= ExperienceBand::Mid {
        wins.push(ActionItem {
            title: "Senior Role Interview Prep".to_string(),
            description: "Complete a 90-day plan: 60 problems, 20 system designs, and 10 \
                          behavioral questions."
                .to_string(),
            icon: "trophy",
            priority: 95,
        });
    }

    if let Some(item) = portfolio_item(signals) {
        wins.push(item);
    }

    if signals.experience >= ExperienceBand::Mid {
        wins.push(ActionItem {
            title: "Build Technical Brand".to_string(),
            description: "Write three technical posts or tutorial videos on topics you have \
                          mastered."
                .to_string(),
            icon: "certificate",
            priority: 65,
        });
    }

    dedupe_by_title(&mut wins);

    for fallback in fallback_items(signals) {
        if wins.len() >= MIN_ITEMS {
            break;
        }
        if !wins.iter().any(|win| win.title == fallback.title) {
            wins.push(fallback);
        }
    }

    // Stable sort keeps insertion order inside a priority band.
    wins.sort_by(|a, b| b.priority.cmp(&a.priority));
    wins.truncate(MAX_ITEMS);
    wins
}

fn dedupe_by_title(wins: &mut Vec<ActionItem>) {
    let mut seen: Vec<String> = Vec::new();
    wins.retain(|win| {
        if seen.contains(&win.title) {
            false
        } else {
            seen.push(win.title.clone());
            true
        }
    });
}
