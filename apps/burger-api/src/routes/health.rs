//! Health endpoint.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use burger_db::migrations::migration_status;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub database: bool,
    pub migrations_applied: usize,
    pub migrations_total: usize,
    pub menu_items: usize,
    pub version: &'static str,
}

impl IntoResponse for HealthResponse {
    fn into_response(self) -> Response {
        let status = match self.status {
            HealthStatus::Healthy => StatusCode::OK,
            HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
        };
        (status, Json(self)).into_response()
    }
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> HealthResponse {
    let database = state.db.health_check().await;
    let (migrations_total, migrations_applied) =
        migration_status(state.db.pool()).await.unwrap_or((0, 0));

    let status = if database && migrations_applied == migrations_total {
        HealthStatus::Healthy
    } else {
        HealthStatus::Unhealthy
    };

    HealthResponse {
        status,
        database,
        migrations_applied,
        migrations_total,
        menu_items: state.catalog.len(),
        version: env!("CARGO_PKG_VERSION"),
    }
}
