use crate::domain::{JobId, JobStatus, JobTransitionError};

#[derive(Debug, thiserror::Error)]
pub enum JobStoreError {
    #[error("not found: {0}")]
    NotFound(JobId),
    #[error("job {id} is already {status}")]
    AlreadyTerminal { id: JobId, status: JobStatus },
    #[error("invalid outcome for job {0}: outcome text must not be empty")]
    InvalidOutcome(JobId),
    #[error("capacity exhausted: {0} jobs stored")]
    CapacityExhausted(usize),
}

impl JobStoreError {
    pub fn from_transition(id: JobId, err: JobTransitionError) -> Self {
        match err {
            JobTransitionError::AlreadyTerminal { id, status } => {
                JobStoreError::AlreadyTerminal { id, status }
            }
            JobTransitionError::EmptyOutcome => JobStoreError::InvalidOutcome(id),
        }
    }
}
