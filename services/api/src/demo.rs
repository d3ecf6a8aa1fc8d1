use crate::infra::{evaluation_service, load_submission};
use career_compass::error::AppError;
use career_compass::workflows::cohort::{CohortReview, CohortSummary};
use career_compass::workflows::evaluation::RecommendationBundle;
use clap::Args;
use serde_json::{json, Value};
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// JSON submission file to evaluate instead of the built-in sample.
    #[arg(long)]
    pub(crate) submission: Option<PathBuf>,
    /// Include the score component breakdown in the output.
    #[arg(long)]
    pub(crate) show_components: bool,
    /// Skip the contrasting flagged-profile portion of the demo.
    #[arg(long)]
    pub(crate) skip_contrast: bool,
}

#[derive(Args, Debug)]
pub(crate) struct CohortReportArgs {
    /// Questionnaire CSV export to evaluate.
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Print one line per candidate in addition to the summary.
    #[arg(long)]
    pub(crate) list_candidates: bool,
}

pub(crate) fn run_cohort_report(args: CohortReportArgs) -> Result<(), AppError> {
    let CohortReportArgs {
        csv,
        list_candidates,
    } = args;

    let service = evaluation_service();
    let review = CohortReview::from_path(&csv, &service)?;

    println!("Cohort report for {}", csv.display());
    render_cohort_summary(&review.summary);

    if list_candidates {
        println!("\nCandidates");
        for entry in &review.entries {
            let submitted = match entry.submitted_on {
                Some(date) => format!(" (submitted {date})"),
                None => String::new(),
            };
            let quick_win = entry.top_quick_win.as_deref().unwrap_or("none");
            println!(
                "- {}: score {} | {} | {} flag(s) | next step: {}{}",
                entry.candidate, entry.final_score, entry.tier_label, entry.flags, quick_win,
                submitted
            );
        }
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        submission,
        show_components,
        skip_contrast,
    } = args;

    let service = evaluation_service();
    println!("Career readiness demo");

    let submission = match submission.as_deref().map(load_submission) {
        Some(Ok(value)) => value,
        Some(Err(message)) => {
            println!("Submission file rejected: {message}");
            return Ok(());
        }
        None => sample_submission(),
    };

    let bundle = match service.evaluate(&submission) {
        Ok(bundle) => bundle,
        Err(err) => {
            println!("Submission rejected: {err}");
            return Ok(());
        }
    };
    render_bundle(&bundle, show_components);

    if skip_contrast {
        return Ok(());
    }

    println!("\n================================================");
    println!("Contrast: an overstated early-career submission");
    match service.evaluate(&overstated_submission()) {
        Ok(contrast) => render_bundle(&contrast, show_components),
        Err(err) => println!("Contrast submission rejected: {err}"),
    }

    Ok(())
}

/// A consistent senior profile aiming at big tech, mirroring one row of the
/// sample cohort export.
fn sample_submission() -> Value {
    json!({
        "experience": "5-8",
        "current_role": "swe-product",
        "problem_solving": "100+",
        "system_design": "multiple",
        "portfolio": "active-5+",
        "target_role": "senior-backend",
        "target_company": "faang",
    })
}

/// A career switcher claiming design leadership with nothing backing it, to
/// show the contradiction rules and score floor in action.
fn overstated_submission() -> Value {
    json!({
        "experience": "0-2",
        "current_role": "career-switcher",
        "problem_solving": "0-10",
        "system_design": "led-multiple",
        "portfolio": "none",
        "target_role": "tech-lead",
        "target_company": "faang",
    })
}

fn render_cohort_summary(summary: &CohortSummary) {
    println!(
        "- {} candidate(s) evaluated | average score {:.1} | {} flagged",
        summary.evaluated, summary.average_score, summary.flagged
    );
    println!("Tier distribution:");
    for count in &summary.tier_counts {
        println!("  - {}: {}", count.tier_label, count.count);
    }
}

pub(crate) fn render_bundle(bundle: &RecommendationBundle, show_components: bool) {
    println!(
        "\nReadiness score: {} ({})",
        bundle.final_score, bundle.score_status_label
    );
    println!(
        "Assessed tier: {} | matched openings at: {}",
        bundle.seniority.tier_label, bundle.seniority.matching_tier_label
    );

    if bundle.contradictions.flagged {
        println!(
            "\nConsistency flags (-{} points)",
            bundle.contradictions.penalty
        );
        for rule in &bundle.contradictions.rules {
            println!("- {}", rule.label());
        }
    }

    if !bundle.normalization_notes.is_empty() {
        println!("\nNormalization notes");
        for note in &bundle.normalization_notes {
            println!("- {}: {}", note.field.label(), note.detail);
        }
    }

    if show_components {
        println!("\nScore components");
        for component in &bundle.score_components {
            println!(
                "- {:?}: {} ({})",
                component.factor, component.score, component.notes
            );
        }
    }

    println!("\nProfile");
    println!("{}", bundle.profile.summary);
    for stat in &bundle.profile.key_stats {
        println!("- {}: {}", stat.label, stat.value);
    }

    println!("\nMatched openings");
    for posting in &bundle.openings {
        println!(
            "- {} | {} | {} | {}",
            posting.title, posting.seniority_label, posting.company_tier_label, posting.requirement
        );
    }

    println!("\nQuick wins");
    for item in &bundle.quick_wins {
        println!("- [{}] {}: {}", item.priority, item.title, item.description);
    }

    println!("\nSuggested tools");
    for tool in &bundle.tools {
        println!("- {}: {}", tool.name, tool.justification);
    }

    println!(
        "\nTransition plan: {} ({} confidence)",
        bundle.timeline.window,
        bundle.timeline.confidence.label()
    );
    println!("Key gap: {}", bundle.timeline.key_gap);
    for milestone in &bundle.timeline.milestones {
        println!("- {}: {}", milestone.window(), milestone.description);
    }

    if !bundle.alternate_paths.is_empty() {
        println!("\nAlternate paths");
        for path in &bundle.alternate_paths {
            println!(
                "- {} ({}): {} in {}",
                path.title,
                path.seniority.label(),
                path.reason,
                path.timeline.window
            );
        }
    }

    println!(
        "\nPeer standing: {} percentile among {} (potential {})",
        bundle.peers.percentile, bundle.peers.peer_group, bundle.peers.potential_percentile
    );

    println!("\nStrengths");
    for strength in &bundle.narrative.strengths {
        println!("- {}", strength);
    }
    println!("\nDevelopment areas");
    for area in &bundle.narrative.development_areas {
        println!("- {}", area);
    }
    if !bundle.narrative.caveats.is_empty() {
        println!("\nCaveats");
        for caveat in &bundle.narrative.caveats {
            println!("- {}", caveat);
        }
    }
}
