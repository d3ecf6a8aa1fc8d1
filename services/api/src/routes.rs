use crate::infra::AppState;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use career_compass::error::AppError;
use career_compass::workflows::cohort::{CohortEntry, CohortReview, CohortSummary};
use career_compass::workflows::evaluation::{evaluation_router, EvaluationService};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::Cursor;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub(crate) struct CohortReportRequest {
    /// Raw questionnaire export, CSV text with a header row.
    pub(crate) csv: String,
    #[serde(default)]
    pub(crate) include_entries: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct CohortReportResponse {
    pub(crate) summary: CohortSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) entries: Option<Vec<CohortEntry>>,
}

pub(crate) fn with_evaluation_routes(service: Arc<EvaluationService>) -> axum::Router {
    let cohort_routes = axum::Router::new()
        .route(
            "/api/v1/cohort/report",
            axum::routing::post(cohort_report_endpoint),
        )
        .with_state(service.clone());

    evaluation_router(service)
        .merge(cohort_routes)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn cohort_report_endpoint(
    State(service): State<Arc<EvaluationService>>,
    Json(payload): Json<CohortReportRequest>,
) -> Result<Json<CohortReportResponse>, AppError> {
    let CohortReportRequest {
        csv,
        include_entries,
    } = payload;

    let review = CohortReview::from_reader(Cursor::new(csv.into_bytes()), &service)?;
    let CohortReview { entries, summary } = review;
    let entries = include_entries.then_some(entries);

    Ok(Json(CohortReportResponse { summary, entries }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::evaluation_service;
    use career_compass::workflows::evaluation::SeniorityTier;

    fn sample_csv() -> String {
        "Candidate,Submitted At,Experience,Current Role,Problem Solving,System Design,Portfolio,Target Role,Target Company\n\
Priya Raman,2026-03-02T10:15:00Z,8+,swe-product,100+,multiple,active-5+,senior-backend,faang\n\
Noah Brandt,2026-03-05,0-2,career-switcher,0-10,led-multiple,none,tech-lead,faang\n"
            .to_string()
    }

    #[tokio::test]
    async fn cohort_report_endpoint_returns_summary() {
        let service = Arc::new(evaluation_service());
        let request = CohortReportRequest {
            csv: sample_csv(),
            include_entries: false,
        };

        let Json(body) = cohort_report_endpoint(State(service), Json(request))
            .await
            .expect("report builds");

        assert_eq!(body.summary.evaluated, 2);
        assert_eq!(body.summary.flagged, 1);
        assert!(body.entries.is_none());
    }

    #[tokio::test]
    async fn cohort_report_endpoint_can_include_entries() {
        let service = Arc::new(evaluation_service());
        let request = CohortReportRequest {
            csv: sample_csv(),
            include_entries: true,
        };

        let Json(body) = cohort_report_endpoint(State(service), Json(request))
            .await
            .expect("report builds");

        let entries = body.entries.expect("entries returned");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].candidate, "Priya Raman");
        assert_eq!(entries[0].tier, SeniorityTier::Staff);
        assert_eq!(entries[1].tier, SeniorityTier::Entry);
        assert_eq!(entries[1].flags, 2);
    }
}
