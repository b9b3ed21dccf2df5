use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::application::ports::JobStoreError;
use crate::application::services::DispatchError;
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

use super::error_response;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub company_input: String,
    #[serde(default)]
    pub sector: Option<String>,
}

#[derive(Serialize)]
pub struct AnalyzeResponse {
    pub job_id: String,
    pub status: String,
    pub message: String,
}

#[tracing::instrument(skip(state, payload))]
pub async fn analyze_handler(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(p) => p,
        Err(e) => {
            tracing::warn!(error = %e, "Rejected malformed analyze request");
            return error_response(
                StatusCode::BAD_REQUEST,
                format!("Invalid request body: {}", e.body_text()),
            );
        }
    };

    let company_input = request.company_input.trim().to_string();

    match state
        .dispatcher
        .submit(&company_input, request.sector.as_deref())
        .await
    {
        Ok(job_id) => (
            StatusCode::ACCEPTED,
            Json(AnalyzeResponse {
                job_id: job_id.to_string(),
                status: "started".to_string(),
                message: format!("Analysis started for {}", company_input),
            }),
        )
            .into_response(),
        Err(DispatchError::Validation(e)) => {
            tracing::debug!(error = %e, "Analyze request failed validation");
            error_response(StatusCode::BAD_REQUEST, e.to_string())
        }
        Err(DispatchError::Store(JobStoreError::CapacityExhausted(count))) => {
            tracing::error!(
                jobs = count,
                company = %sanitize_prompt(&company_input),
                "Job store full, rejecting analysis"
            );
            error_response(
                StatusCode::SERVICE_UNAVAILABLE,
                "Too many analysis jobs, try again later".to_string(),
            )
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to start analysis");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to start analysis: {}", e),
            )
        }
    }
}
