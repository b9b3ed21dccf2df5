use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::domain::{Job, JobId};
use crate::presentation::state::AppState;

use super::error_response;

#[derive(Serialize)]
pub struct JobStatusResponse {
    pub job_id: String,
    pub status: String,
    pub company_input: String,
    pub sector: Option<String>,
    pub created_at: String,
    pub finished_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<Job> for JobStatusResponse {
    fn from(job: Job) -> Self {
        Self {
            job_id: job.id().to_string(),
            status: job.status().as_str().to_string(),
            company_input: job.company_input().to_string(),
            sector: job.sector().map(String::from),
            created_at: job.created_at().to_rfc3339(),
            finished_at: job.finished_at().map(|t| t.to_rfc3339()),
            result: job.result().map(String::from),
            error: job.error().map(String::from),
        }
    }
}

#[tracing::instrument(skip(state))]
pub async fn job_status_handler(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Response {
    // Ids are opaque to clients: a malformed id is just an unknown job.
    let Ok(id) = job_id.parse::<JobId>() else {
        return not_found(&job_id);
    };

    match state.job_store.get(id).await {
        Ok(Some(job)) => (StatusCode::OK, Json(JobStatusResponse::from(job))).into_response(),
        Ok(None) => not_found(&job_id),
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch job status");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to fetch job: {}", e),
            )
        }
    }
}

fn not_found(job_id: &str) -> Response {
    error_response(StatusCode::NOT_FOUND, format!("Job not found: {}", job_id))
}
