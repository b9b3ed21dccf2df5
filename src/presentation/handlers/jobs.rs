use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::domain::Job;
use crate::presentation::state::AppState;

use super::error_response;

#[derive(Serialize)]
pub struct JobSummary {
    pub job_id: String,
    pub company_input: String,
    pub sector: Option<String>,
    pub status: String,
    pub created_at: String,
    pub finished_at: Option<String>,
}

#[derive(Serialize)]
pub struct JobListResponse {
    pub jobs: Vec<JobSummary>,
}

impl From<&Job> for JobSummary {
    fn from(job: &Job) -> Self {
        Self {
            job_id: job.id().to_string(),
            company_input: job.company_input().to_string(),
            sector: job.sector().map(String::from),
            status: job.status().as_str().to_string(),
            created_at: job.created_at().to_rfc3339(),
            finished_at: job.finished_at().map(|t| t.to_rfc3339()),
        }
    }
}

pub async fn list_jobs_handler(State(state): State<AppState>) -> Response {
    match state.job_store.list().await {
        Ok(jobs) => (
            StatusCode::OK,
            Json(JobListResponse {
                jobs: jobs.iter().map(JobSummary::from).collect(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to list jobs");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to list jobs: {}", e),
            )
        }
    }
}
