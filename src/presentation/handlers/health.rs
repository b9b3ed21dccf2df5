use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::Utc;
use serde::Serialize;

use crate::domain::JobStatus;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub active_jobs: usize,
    pub total_jobs: usize,
}

pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let active_jobs = state
        .job_store
        .count_by_status(JobStatus::Running)
        .await
        .unwrap_or_default();
    let total_jobs = state.job_store.count().await.unwrap_or_default();

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            active_jobs,
            total_jobs,
        }),
    )
}
