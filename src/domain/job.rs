use chrono::{DateTime, Utc};

use super::{AnalysisRequest, JobId, JobStatus};

/// One requested analysis, tracked from submission to its terminal outcome.
///
/// Fields are private so the only way to leave `Running` is through
/// [`Job::complete`] or [`Job::fail`].
#[derive(Debug, Clone, PartialEq)]
pub struct Job {
    id: JobId,
    company_input: String,
    sector: Option<String>,
    status: JobStatus,
    result: Option<String>,
    error: Option<String>,
    created_at: DateTime<Utc>,
    finished_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JobTransitionError {
    #[error("job {id} is already {status}")]
    AlreadyTerminal { id: JobId, status: JobStatus },
    #[error("terminal outcome text must not be empty")]
    EmptyOutcome,
}

impl Job {
    pub fn new(request: AnalysisRequest) -> Self {
        Self {
            id: JobId::new(),
            company_input: request.company_input().to_string(),
            sector: request.sector().map(String::from),
            status: JobStatus::Running,
            result: None,
            error: None,
            created_at: Utc::now(),
            finished_at: None,
        }
    }

    pub fn complete(&mut self, result: String) -> Result<(), JobTransitionError> {
        self.ensure_running()?;
        if result.trim().is_empty() {
            return Err(JobTransitionError::EmptyOutcome);
        }
        self.status = JobStatus::Completed;
        self.result = Some(result);
        self.finished_at = Some(Utc::now());
        Ok(())
    }

    pub fn fail(&mut self, error: String) -> Result<(), JobTransitionError> {
        self.ensure_running()?;
        if error.trim().is_empty() {
            return Err(JobTransitionError::EmptyOutcome);
        }
        self.status = JobStatus::Failed;
        self.error = Some(error);
        self.finished_at = Some(Utc::now());
        Ok(())
    }

    fn ensure_running(&self) -> Result<(), JobTransitionError> {
        if self.status.is_terminal() {
            return Err(JobTransitionError::AlreadyTerminal {
                id: self.id,
                status: self.status,
            });
        }
        Ok(())
    }

    pub fn id(&self) -> JobId {
        self.id
    }

    pub fn company_input(&self) -> &str {
        &self.company_input
    }

    pub fn sector(&self) -> Option<&str> {
        self.sector.as_deref()
    }

    pub fn status(&self) -> JobStatus {
        self.status
    }

    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.finished_at
    }
}
