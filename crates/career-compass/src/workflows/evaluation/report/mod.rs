mod insights;
mod summary;
pub mod views;

pub(crate) use insights::{build_narrative_context, review_narrative};
pub(crate) use summary::{compare_with_peers, summarize_profile};
