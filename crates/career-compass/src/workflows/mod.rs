pub mod cohort;
pub mod evaluation;
