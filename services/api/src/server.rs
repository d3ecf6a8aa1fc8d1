use crate::cli::ServeArgs;
use crate::infra::{evaluation_service, AppState};
use crate::routes::with_evaluation_routes;
use axum::{Extension, Router};
use axum_prometheus::PrometheusMetricLayer;
use career_compass::config::AppConfig;
use career_compass::error::AppError;
use career_compass::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;
    args.apply(&mut config);

    telemetry::init(&config.telemetry)?;

    let readiness = Arc::new(AtomicBool::new(false));
    let app = build_app(readiness.clone());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness.store(true, Ordering::Release);

    info!(%addr, environment = ?config.environment, "evaluation service listening");

    axum::serve(listener, app).await?;
    Ok(())
}

fn build_app(readiness: Arc<AtomicBool>) -> Router {
    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let state = AppState {
        readiness,
        metrics: Arc::new(prometheus_handle),
    };

    with_evaluation_routes(Arc::new(evaluation_service()))
        .layer(Extension(state))
        .layer(prometheus_layer)
}
