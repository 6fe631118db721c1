use axum::extract::State;
use axum::{routing::get, Json, Router};
use realty_core::types::Timestamp;
use serde::Serialize;

use crate::response::DataResponse;
use crate::state::AppState;

/// Body of `GET /health`. `status` is `"degraded"` when Postgres does not
/// answer `SELECT 1`; the endpoint itself still returns 200.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
}

/// Liveness payload for the `healthcheck` procedure.
#[derive(Serialize)]
pub struct HealthcheckOutput {
    pub status: &'static str,
    pub timestamp: Timestamp,
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = realty_db::health_check(&state.pool).await.is_ok();
    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

/// The `healthcheck` procedure: answers without touching Postgres.
async fn healthcheck() -> Json<DataResponse<HealthcheckOutput>> {
    Json(DataResponse {
        data: HealthcheckOutput {
            status: "ok",
            timestamp: chrono::Utc::now(),
        },
    })
}

/// `GET /health`, outside the procedure catalog.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

/// `GET /healthcheck`, nested under `/rpc` by [`crate::routes::rpc_routes`].
pub fn rpc_router() -> Router<AppState> {
    Router::new().route("/healthcheck", get(healthcheck))
}
