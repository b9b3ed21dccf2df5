use async_trait::async_trait;

use crate::domain::{AnalysisRequest, Job, JobId, JobStatus};

use super::JobStoreError;

/// Owner of every job record.
///
/// `complete` and `fail` succeed at most once per job; a second terminal
/// write is rejected with [`JobStoreError::AlreadyTerminal`].
#[async_trait]
pub trait JobStore: Send + Sync {
    async fn create(&self, request: AnalysisRequest) -> Result<JobId, JobStoreError>;

    async fn get(&self, id: JobId) -> Result<Option<Job>, JobStoreError>;

    async fn complete(&self, id: JobId, result: String) -> Result<Job, JobStoreError>;

    async fn fail(&self, id: JobId, error: String) -> Result<Job, JobStoreError>;

    async fn list(&self) -> Result<Vec<Job>, JobStoreError>;

    async fn count_by_status(&self, status: JobStatus) -> Result<usize, JobStoreError>;

    async fn count(&self) -> Result<usize, JobStoreError>;
}
