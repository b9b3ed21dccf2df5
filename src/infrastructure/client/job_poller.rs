use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{JobApi, JobApiError};
use crate::domain::JobStatus;

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);
/// 15 minutes at the default interval.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 450;

#[derive(Debug, Clone)]
pub struct PollerSettings {
    pub interval: Duration,
    /// `None` polls until a terminal state, however long that takes.
    pub max_attempts: Option<u32>,
}

impl Default for PollerSettings {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            max_attempts: Some(DEFAULT_MAX_ATTEMPTS),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollerState {
    Idle,
    Polling {
        job_id: String,
        attempts: u32,
    },
    ShowingResult {
        job_id: String,
        report: String,
    },
    ShowingError {
        job_id: Option<String>,
        message: String,
    },
}

impl PollerState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            PollerState::ShowingResult { .. } | PollerState::ShowingError { .. }
        )
    }
}

/// Submits one analysis and polls it at a fixed interval until the job
/// reaches a terminal state, the job disappears, or a poll fails.
pub struct JobPoller {
    api: Arc<dyn JobApi>,
    settings: PollerSettings,
    state: PollerState,
}

impl JobPoller {
    pub fn new(api: Arc<dyn JobApi>, settings: PollerSettings) -> Self {
        Self {
            api,
            settings,
            state: PollerState::Idle,
        }
    }

    pub fn state(&self) -> &PollerState {
        &self.state
    }

    pub async fn submit(&mut self, company_input: &str, sector: Option<&str>) -> &PollerState {
        self.state = match self.api.submit(company_input, sector).await {
            Ok(job_id) => PollerState::Polling {
                job_id,
                attempts: 0,
            },
            Err(JobApiError::Rejected(message)) => PollerState::ShowingError {
                job_id: None,
                message,
            },
            Err(e) => PollerState::ShowingError {
                job_id: None,
                message: format!("Failed to start analysis: {}", e),
            },
        };
        &self.state
    }

    /// Performs one status request. Does nothing unless the poller is polling.
    pub async fn poll_once(&mut self) -> &PollerState {
        let (job_id, attempts) = match &self.state {
            PollerState::Polling { job_id, attempts } => (job_id.clone(), *attempts + 1),
            _ => return &self.state,
        };

        self.state = match self.api.status(&job_id).await {
            Ok(snapshot) => match snapshot.status {
                JobStatus::Completed => PollerState::ShowingResult {
                    job_id,
                    report: snapshot.result.unwrap_or_default(),
                },
                JobStatus::Failed => PollerState::ShowingError {
                    job_id: Some(job_id),
                    message: snapshot
                        .error
                        .unwrap_or_else(|| "Analysis failed".to_string()),
                },
                JobStatus::Running => match self.settings.max_attempts {
                    Some(max) if attempts >= max => PollerState::ShowingError {
                        message: format!(
                            "Gave up waiting for job {} after {} status checks",
                            job_id, attempts
                        ),
                        job_id: Some(job_id),
                    },
                    _ => PollerState::Polling { job_id, attempts },
                },
            },
            Err(JobApiError::NotFound(_)) => PollerState::ShowingError {
                message: format!("Job {} not found", job_id),
                job_id: Some(job_id),
            },
            Err(e) => {
                tracing::warn!(job_id = %job_id, error = %e, "Status poll failed");
                PollerState::ShowingError {
                    job_id: Some(job_id),
                    message: "Failed to check analysis status".to_string(),
                }
            }
        };
        &self.state
    }

    /// Polls until a terminal state, sleeping `interval` between requests.
    pub async fn run_to_completion(&mut self) -> &PollerState {
        while matches!(self.state, PollerState::Polling { .. }) {
            tokio::time::sleep(self.settings.interval).await;
            self.poll_once().await;
        }
        &self.state
    }
}
