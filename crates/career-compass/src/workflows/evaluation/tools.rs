use serde::Serialize;

use super::blueprint::{RecommendationBlueprint, ToolEntry, TOOL_DENYLIST};
use super::domain::{DesignExposure, ExperienceBand, SignalSet, TechFocus};
use super::jobs::infer_focus;

const MIN_TOOLS: usize = 4;
const MAX_TOOLS: usize = 8;

/// A curated tool with the reason it earns a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToolSuggestion {
    pub name: &'static str,
    pub justification: &'static str,
}

fn denylisted(name: &str) -> bool {
    TOOL_DENYLIST.iter().any(|banned| name.contains(banned))
}

fn push_entries(suggestions: &mut Vec<ToolSuggestion>, entries: &[ToolEntry]) {
    for entry in entries {
        if denylisted(entry.name) {
            continue;
        }
        if suggestions.iter().any(|existing| existing.name == entry.name) {
            continue;
        }
        suggestions.push(ToolSuggestion {
            name: entry.name,
            justification: entry.justification,
        });
    }
}

/// Picks 4-8 focus-appropriate tools from the blueprint shelves.
pub(crate) fn recommend_tools(
    signals: &SignalSet,
    blueprint: &RecommendationBlueprint,
) -> Vec<ToolSuggestion> {
    let focus = infer_focus(signals);
    let seasoned = signals.experience >= ExperienceBand::Mid;
    let mut suggestions = Vec::new();

    if seasoned || signals.design_exposure >= DesignExposure::Single {
        push_entries(&mut suggestions, blueprint.design_tools());
    }

    let shelf = blueprint
        .tool_shelf(focus)
        .or_else(|| blueprint.tool_shelf(TechFocus::Fullstack));
    if let Some(shelf) = shelf {
        push_entries(&mut suggestions, &shelf.entries);
        if seasoned {
            push_entries(&mut suggestions, &shelf.advanced);
        }
    }

    if suggestions.len() < MIN_TOOLS {
        push_entries(&mut suggestions, blueprint.general_tools());
    }

    suggestions.truncate(MAX_TOOLS);
    suggestions
}
