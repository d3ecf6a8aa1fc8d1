use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};

use super::report::views::NarrativeDraft;
use super::service::{EvaluationService, EvaluationServiceError};

/// Router builder exposing HTTP endpoints for evaluation and review.
pub fn evaluation_router(service: Arc<EvaluationService>) -> Router {
    Router::new()
        .route("/api/v1/evaluations", post(evaluate_handler))
        .route(
            "/api/v1/evaluations/narrative-review",
            post(narrative_review_handler),
        )
        .with_state(service)
}

pub(crate) async fn evaluate_handler(
    State(service): State<Arc<EvaluationService>>,
    axum::Json(submission): axum::Json<Value>,
) -> Response {
    match service.evaluate(&submission) {
        Ok(bundle) => (StatusCode::OK, axum::Json(bundle)).into_response(),
        Err(EvaluationServiceError::Normalization(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}

/// Request body pairing the original submission with the drafted claims.
#[derive(Debug, Deserialize)]
pub struct NarrativeReviewRequest {
    pub submission: Value,
    #[serde(default)]
    pub draft: NarrativeDraft,
}

pub(crate) async fn narrative_review_handler(
    State(service): State<Arc<EvaluationService>>,
    axum::Json(request): axum::Json<NarrativeReviewRequest>,
) -> Response {
    match service.review_narrative(&request.submission, &request.draft) {
        Ok(review) => (StatusCode::OK, axum::Json(review)).into_response(),
        Err(EvaluationServiceError::Normalization(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}
