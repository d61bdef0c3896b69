//! Health Check Handlers
//!
//! - `GET /health` - process is up
//! - `GET /health/ready` - PostgreSQL answers; 503 otherwise

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::startup::AppState;

/// Health response body
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
}

impl HealthResponse {
    fn new(status: &'static str, database: Option<String>) -> Self {
        Self {
            status,
            version: env!("CARGO_PKG_VERSION"),
            database,
        }
    }
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::new("healthy", None))
}

/// Readiness: the hotel endpoints are useless without the database.
pub async fn readiness(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let ping = sqlx::query("SELECT 1").execute(&state.db).await;
    readiness_response(ping.map(|_| ()))
}

fn readiness_response(ping: Result<(), sqlx::Error>) -> (StatusCode, Json<HealthResponse>) {
    match ping {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse::new("ready", Some("up".into()))),
        ),
        Err(e) => {
            tracing::warn!("Readiness check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse::new("unavailable", Some(e.to_string()))),
            )
        }
    }
}
