use axum::{Json, extract::State, http::StatusCode};
use tracing::warn;

use crate::router::AppState;
use crate::types::health::HealthStatus;

/// GET /health -> liveness only; never touches the database.
pub async fn liveness() -> Json<HealthStatus> {
    Json(HealthStatus::alive())
}

/// GET /health/ready -> 200 when `SELECT 1` succeeds, 503 otherwise.
pub async fn readiness(State(state): State<AppState>) -> (StatusCode, Json<HealthStatus>) {
    let result = match state.storage() {
        Ok(storage) => storage.ping().await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => (StatusCode::OK, Json(HealthStatus::with_database(true))),
        Err(e) => {
            warn!(error = %e, "readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthStatus::with_database(false)),
            )
        }
    }
}
