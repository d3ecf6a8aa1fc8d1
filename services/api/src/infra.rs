use career_compass::workflows::evaluation::{EvaluationService, ScoringConfig};
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::Value;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Every surface (HTTP, cohort CLI, demo) evaluates with the same standard
/// rubric so scores stay comparable across them.
pub(crate) fn evaluation_service() -> EvaluationService {
    EvaluationService::new(ScoringConfig::standard())
}

pub(crate) fn load_submission(path: &Path) -> Result<Value, String> {
    let raw = std::fs::read_to_string(path)
        .map_err(|err| format!("failed to read '{}' ({err})", path.display()))?;
    serde_json::from_str(&raw).map_err(|err| format!("'{}' is not valid JSON ({err})", path.display()))
}
