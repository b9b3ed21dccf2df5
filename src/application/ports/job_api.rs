use async_trait::async_trait;

use crate::domain::JobStatus;

/// What a client observes when it polls one job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobSnapshot {
    pub job_id: String,
    pub status: JobStatus,
    pub result: Option<String>,
    pub error: Option<String>,
}

/// Client-side view of the analysis API.
#[async_trait]
pub trait JobApi: Send + Sync {
    async fn submit(
        &self,
        company_input: &str,
        sector: Option<&str>,
    ) -> Result<String, JobApiError>;

    async fn status(&self, job_id: &str) -> Result<JobSnapshot, JobApiError>;
}

#[derive(Debug, thiserror::Error)]
pub enum JobApiError {
    #[error("rejected: {0}")]
    Rejected(String),
    #[error("job not found: {0}")]
    NotFound(String),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
