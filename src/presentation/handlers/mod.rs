mod analyze;
mod health;
mod job_status;
mod jobs;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

pub use analyze::{AnalyzeRequest, AnalyzeResponse, analyze_handler};
pub use health::{HealthResponse, health_handler};
pub use job_status::{JobStatusResponse, job_status_handler};
pub use jobs::{JobListResponse, JobSummary, list_jobs_handler};

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn error_response(status: StatusCode, error: String) -> Response {
    (status, Json(ErrorResponse { error })).into_response()
}
