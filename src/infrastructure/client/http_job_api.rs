use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::application::ports::{JobApi, JobApiError, JobSnapshot};
use crate::domain::JobStatus;

/// Upper bound for a single submit or status request.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// [`JobApi`] over the service's HTTP endpoints.
pub struct HttpJobApi {
    client: Client,
    base_url: String,
}

#[derive(Serialize)]
struct AnalyzeBody<'a> {
    company_input: &'a str,
    sector: Option<&'a str>,
}

#[derive(Deserialize)]
struct AnalyzeReply {
    job_id: String,
}

#[derive(Deserialize)]
struct StatusReply {
    job_id: String,
    status: String,
    result: Option<String>,
    error: Option<String>,
}

#[derive(Deserialize)]
struct ErrorReply {
    error: String,
}

impl HttpJobApi {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, JobApiError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| JobApiError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    async fn error_message(response: reqwest::Response) -> String {
        let status = response.status();
        match response.json::<ErrorReply>().await {
            Ok(reply) => reply.error,
            Err(_) => format!("HTTP {}", status),
        }
    }

    fn transport_error(e: reqwest::Error) -> JobApiError {
        if e.is_timeout() {
            JobApiError::Transport(format!("request timed out: {}", e))
        } else {
            JobApiError::Transport(e.to_string())
        }
    }
}

#[async_trait]
impl JobApi for HttpJobApi {
    async fn submit(
        &self,
        company_input: &str,
        sector: Option<&str>,
    ) -> Result<String, JobApiError> {
        let response = self
            .client
            .post(format!("{}/api/analyze", self.base_url))
            .json(&AnalyzeBody {
                company_input,
                sector,
            })
            .send()
            .await
            .map_err(Self::transport_error)?;

        if response.status() == StatusCode::BAD_REQUEST {
            return Err(JobApiError::Rejected(Self::error_message(response).await));
        }
        if !response.status().is_success() {
            return Err(JobApiError::Transport(Self::error_message(response).await));
        }

        let reply: AnalyzeReply = response
            .json()
            .await
            .map_err(|e| JobApiError::InvalidResponse(e.to_string()))?;
        Ok(reply.job_id)
    }

    async fn status(&self, job_id: &str) -> Result<JobSnapshot, JobApiError> {
        let response = self
            .client
            .get(format!("{}/api/status/{}", self.base_url, job_id))
            .send()
            .await
            .map_err(Self::transport_error)?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(JobApiError::NotFound(job_id.to_string()));
        }
        if !response.status().is_success() {
            return Err(JobApiError::Transport(Self::error_message(response).await));
        }

        let reply: StatusReply = response
            .json()
            .await
            .map_err(|e| JobApiError::InvalidResponse(e.to_string()))?;
        let status = reply
            .status
            .parse::<JobStatus>()
            .map_err(JobApiError::InvalidResponse)?;

        Ok(JobSnapshot {
            job_id: reply.job_id,
            status,
            result: reply.result,
            error: reply.error,
        })
    }
}
