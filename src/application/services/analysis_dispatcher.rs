use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::Instrument;

use crate::application::ports::{JobStore, JobStoreError, ReportGenerator};
use crate::domain::{AnalysisRequest, JobId, ValidationError};
use crate::infrastructure::observability::sanitize_prompt;

const EMPTY_REPORT_MESSAGE: &str = "report generator returned an empty report";
const ABORTED_MESSAGE: &str = "report generation aborted unexpectedly";

/// Creates jobs and runs the report generator for each one on its own task.
pub struct AnalysisDispatcher {
    job_store: Arc<dyn JobStore>,
    report_generator: Arc<dyn ReportGenerator>,
}

impl AnalysisDispatcher {
    pub fn new(job_store: Arc<dyn JobStore>, report_generator: Arc<dyn ReportGenerator>) -> Self {
        Self {
            job_store,
            report_generator,
        }
    }

    /// Validates the input, records a running job and schedules generation.
    /// Returns as soon as the job exists; generation is not awaited.
    pub async fn submit(
        &self,
        company_input: &str,
        sector: Option<&str>,
    ) -> Result<JobId, DispatchError> {
        let (job_id, _handle) = self.submit_tracked(company_input, sector).await?;
        Ok(job_id)
    }

    /// Same as [`AnalysisDispatcher::submit`] but hands back the background
    /// task so the caller may await the terminal write.
    pub async fn submit_tracked(
        &self,
        company_input: &str,
        sector: Option<&str>,
    ) -> Result<(JobId, JoinHandle<()>), DispatchError> {
        let request = AnalysisRequest::new(company_input, sector)?;
        let job_id = self.job_store.create(request.clone()).await?;

        tracing::info!(
            job_id = %job_id,
            company = %sanitize_prompt(request.company_input()),
            sector = request.sector().unwrap_or("-"),
            "Analysis job created"
        );

        let span = tracing::info_span!("analysis_job", job_id = %job_id);
        let handle = tokio::spawn(
            run_job(
                job_id,
                request,
                Arc::clone(&self.job_store),
                Arc::clone(&self.report_generator),
            )
            .instrument(span),
        );

        Ok((job_id, handle))
    }
}

async fn run_job(
    job_id: JobId,
    request: AnalysisRequest,
    job_store: Arc<dyn JobStore>,
    report_generator: Arc<dyn ReportGenerator>,
) {
    // The generator runs on an inner task so a panic surfaces as a JoinError
    // instead of leaving the job running forever.
    let generation = tokio::spawn(async move {
        report_generator
            .generate(request.company_input(), request.sector())
            .await
    });

    let write = match generation.await {
        Ok(Ok(report)) if !report.trim().is_empty() => {
            tracing::info!(chars = report.len(), "Report generated");
            job_store.complete(job_id, report).await
        }
        Ok(Ok(_)) => {
            tracing::warn!("Report generator returned empty text");
            job_store.fail(job_id, EMPTY_REPORT_MESSAGE.to_string()).await
        }
        Ok(Err(e)) => {
            tracing::error!(error = %e, "Report generation failed");
            job_store.fail(job_id, e.to_string()).await
        }
        Err(e) => {
            tracing::error!(error = %e, "Report generation task aborted");
            job_store.fail(job_id, ABORTED_MESSAGE.to_string()).await
        }
    };

    match write {
        Ok(job) => tracing::debug!(status = %job.status(), "Job status transition"),
        Err(e) => tracing::warn!(error = %e, "Terminal job write rejected"),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("job store: {0}")]
    Store(#[from] JobStoreError),
}
