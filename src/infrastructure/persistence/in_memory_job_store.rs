use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::instrument;

use crate::application::ports::{JobStore, JobStoreError};
use crate::domain::{AnalysisRequest, Job, JobId, JobStatus, JobTransitionError};

/// Process-lifetime job store.
///
/// All writes go through one `RwLock`, so a terminal transition is applied
/// atomically and readers only ever see whole records.
pub struct InMemoryJobStore {
    jobs: RwLock<HashMap<JobId, Job>>,
    max_jobs: usize,
}

impl InMemoryJobStore {
    pub fn new(max_jobs: usize) -> Self {
        Self {
            jobs: RwLock::new(HashMap::new()),
            max_jobs,
        }
    }

    async fn transition<F>(&self, id: JobId, apply: F) -> Result<Job, JobStoreError>
    where
        F: FnOnce(&mut Job) -> Result<(), JobTransitionError>,
    {
        let mut jobs = self.jobs.write().await;
        let job = jobs.get_mut(&id).ok_or(JobStoreError::NotFound(id))?;
        apply(job).map_err(|e| JobStoreError::from_transition(id, e))?;
        Ok(job.clone())
    }
}

impl Default for InMemoryJobStore {
    fn default() -> Self {
        Self::new(10_000)
    }
}

#[async_trait]
impl JobStore for InMemoryJobStore {
    #[instrument(skip(self, request))]
    async fn create(&self, request: AnalysisRequest) -> Result<JobId, JobStoreError> {
        let mut jobs = self.jobs.write().await;
        if jobs.len() >= self.max_jobs {
            return Err(JobStoreError::CapacityExhausted(jobs.len()));
        }

        let job = Job::new(request);
        let id = job.id();
        jobs.insert(id, job);
        Ok(id)
    }

    async fn get(&self, id: JobId) -> Result<Option<Job>, JobStoreError> {
        Ok(self.jobs.read().await.get(&id).cloned())
    }

    #[instrument(skip(self, result), fields(job_id = %id))]
    async fn complete(&self, id: JobId, result: String) -> Result<Job, JobStoreError> {
        self.transition(id, |job| job.complete(result)).await
    }

    #[instrument(skip(self, error), fields(job_id = %id))]
    async fn fail(&self, id: JobId, error: String) -> Result<Job, JobStoreError> {
        self.transition(id, |job| job.fail(error)).await
    }

    async fn list(&self) -> Result<Vec<Job>, JobStoreError> {
        let mut jobs: Vec<Job> = self.jobs.read().await.values().cloned().collect();
        jobs.sort_by_key(|job| job.created_at());
        Ok(jobs)
    }

    async fn count_by_status(&self, status: JobStatus) -> Result<usize, JobStoreError> {
        Ok(self
            .jobs
            .read()
            .await
            .values()
            .filter(|job| job.status() == status)
            .count())
    }

    async fn count(&self) -> Result<usize, JobStoreError> {
        Ok(self.jobs.read().await.len())
    }
}
