mod parser;

use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use serde::Serialize;

use crate::workflows::evaluation::{EvaluationService, SeniorityTier};

#[derive(Debug)]
pub enum CohortImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for CohortImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CohortImportError::Io(err) => write!(f, "failed to read cohort export: {}", err),
            CohortImportError::Csv(err) => write!(f, "invalid cohort CSV data: {}", err),
        }
    }
}

impl std::error::Error for CohortImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CohortImportError::Io(err) => Some(err),
            CohortImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for CohortImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for CohortImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// One evaluated row of a cohort export.
#[derive(Debug, Clone, Serialize)]
pub struct CohortEntry {
    pub candidate: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_on: Option<NaiveDate>,
    pub final_score: i16,
    pub tier: SeniorityTier,
    pub tier_label: &'static str,
    pub flags: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_quick_win: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TierCount {
    pub tier: SeniorityTier,
    pub tier_label: &'static str,
    pub count: usize,
}

/// Aggregates across one imported cohort.
#[derive(Debug, Clone, Serialize)]
pub struct CohortSummary {
    pub evaluated: usize,
    pub average_score: f32,
    pub flagged: usize,
    pub tier_counts: Vec<TierCount>,
}

/// Batch evaluation of a questionnaire CSV export.
#[derive(Debug, Clone, Serialize)]
pub struct CohortReview {
    pub entries: Vec<CohortEntry>,
    pub summary: CohortSummary,
}

impl CohortReview {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        service: &EvaluationService,
    ) -> Result<Self, CohortImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, service)
    }

    pub fn from_reader<R: Read>(
        reader: R,
        service: &EvaluationService,
    ) -> Result<Self, CohortImportError> {
        let mut entries = Vec::new();

        for (index, record) in parser::parse_records(reader)?.into_iter().enumerate() {
            let candidate = record
                .candidate
                .unwrap_or_else(|| format!("candidate-{}", index + 1));

            // Rows rebuild plain string maps, so normalization degrades to
            // defaults instead of rejecting the row.
            let bundle = match service.evaluate(&record.submission) {
                Ok(bundle) => bundle,
                Err(_) => continue,
            };

            entries.push(CohortEntry {
                candidate,
                submitted_on: record.submitted_on,
                final_score: bundle.final_score,
                tier: bundle.seniority.tier,
                tier_label: bundle.seniority.tier_label,
                flags: bundle.contradictions.rules.len(),
                top_quick_win: bundle.quick_wins.first().map(|item| item.title.clone()),
            });
        }

        let summary = summarize(&entries);
        Ok(CohortReview { entries, summary })
    }
}

fn summarize(entries: &[CohortEntry]) -> CohortSummary {
    let evaluated = entries.len();
    let flagged = entries.iter().filter(|entry| entry.flags > 0).count();
    let average_score = if evaluated == 0 {
        0.0
    } else {
        entries
            .iter()
            .map(|entry| f32::from(entry.final_score))
            .sum::<f32>()
            / evaluated as f32
    };

    let tier_counts = SeniorityTier::all()
        .into_iter()
        .map(|tier| TierCount {
            tier,
            tier_label: tier.label(),
            count: entries.iter().filter(|entry| entry.tier == tier).count(),
        })
        .collect();

    CohortSummary {
        evaluated,
        average_score,
        flagged,
        tier_counts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::evaluation::ScoringConfig;
    use std::io::Cursor;

    fn service() -> EvaluationService {
        EvaluationService::new(ScoringConfig::standard())
    }

    #[test]
    fn parse_datetime_supports_rfc3339_and_date_strings() {
        let rfc = parser::parse_datetime_for_tests("2026-03-02T10:00:00Z").expect("parse rfc");
        assert_eq!(
            rfc.date(),
            NaiveDate::from_ymd_opt(2026, 3, 2).expect("valid date")
        );

        let date = parser::parse_datetime_for_tests("2026-03-09").expect("parse date");
        assert_eq!(
            date.date(),
            NaiveDate::from_ymd_opt(2026, 3, 9).expect("valid date")
        );

        assert!(parser::parse_datetime_for_tests("  ").is_none());
        assert!(parser::parse_datetime_for_tests("not-a-date").is_none());
    }

    #[test]
    fn import_evaluates_each_row_and_aggregates() {
        let csv = "Candidate,Submitted At,Experience,Current Role,Problem Solving,System Design,Portfolio,Target Role,Target Company\n\
Priya,2026-03-02T10:00:00Z,8+,swe-product,100+,multiple,active-5+,senior-backend,faang\n\
Dev,2026-03-03,5-8,swe-service,0-10,not-yet,none,tech-lead,product\n";

        let review = CohortReview::from_reader(Cursor::new(csv), &service()).expect("import");

        assert_eq!(review.entries.len(), 2);
        assert_eq!(review.summary.evaluated, 2);

        let priya = &review.entries[0];
        assert_eq!(priya.candidate, "Priya");
        assert_eq!(
            priya.submitted_on,
            NaiveDate::from_ymd_opt(2026, 3, 2)
        );
        assert_eq!(priya.tier, SeniorityTier::Staff);
        assert_eq!(priya.flags, 0);
        assert!(priya.final_score >= 85);

        let dev = &review.entries[1];
        assert!(dev.flags >= 1, "stale senior profile should be flagged");
        assert!(dev.final_score < priya.final_score);
        assert!(dev.top_quick_win.is_some());

        assert_eq!(review.summary.flagged, 1);
        let staff_count = review
            .summary
            .tier_counts
            .iter()
            .find(|count| count.tier == SeniorityTier::Staff)
            .map(|count| count.count);
        assert_eq!(staff_count, Some(1));
        assert!(review.summary.average_score >= 45.0);
        assert!(review.summary.average_score <= 100.0);
    }

    #[test]
    fn import_defaults_empty_cells_and_names_anonymous_rows() {
        let csv = "Candidate,Experience,Problem Solving\n\
,0-2,11-50\n";

        let review = CohortReview::from_reader(Cursor::new(csv), &service()).expect("import");

        assert_eq!(review.entries.len(), 1);
        let entry = &review.entries[0];
        assert_eq!(entry.candidate, "candidate-1");
        assert!(entry.submitted_on.is_none());
        assert_eq!(entry.tier, SeniorityTier::Entry);
        assert!(entry.final_score >= 45);
        assert!(entry.final_score <= 100);
    }

    #[test]
    fn import_ignores_unknown_columns() {
        let csv = "Candidate,Favourite Editor,Experience\nSam,vim,3-5\n";

        let review = CohortReview::from_reader(Cursor::new(csv), &service()).expect("import");

        assert_eq!(review.entries.len(), 1);
        assert_eq!(review.entries[0].tier, SeniorityTier::Mid);
    }

    #[test]
    fn import_from_path_propagates_io_errors() {
        let error = CohortReview::from_path("./does-not-exist.csv", &service())
            .expect_err("expected io error");

        match error {
            CohortImportError::Io(_) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }

    #[test]
    fn empty_export_produces_zeroed_summary() {
        let csv = "Candidate,Experience\n";

        let review = CohortReview::from_reader(Cursor::new(csv), &service()).expect("import");

        assert!(review.entries.is_empty());
        assert_eq!(review.summary.evaluated, 0);
        assert_eq!(review.summary.flagged, 0);
        assert_eq!(review.summary.average_score, 0.0);
        assert!(review
            .summary
            .tier_counts
            .iter()
            .all(|count| count.count == 0));
    }
}
