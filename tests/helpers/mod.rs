#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

use finsight::application::ports::{JobStore, ReportGenerator, ReportGeneratorError};
use finsight::application::services::AnalysisDispatcher;
use finsight::domain::{Job, JobId};
use finsight::infrastructure::persistence::InMemoryJobStore;
use finsight::presentation::{AppState, create_router};

pub const TEST_MAX_JOBS: usize = 100;

/// Holds every report until the gate is opened.
pub struct GatedReportGenerator {
    gate: watch::Receiver<bool>,
}

impl GatedReportGenerator {
    pub fn new() -> (Self, watch::Sender<bool>) {
        let (sender, gate) = watch::channel(false);
        (Self { gate }, sender)
    }
}

#[async_trait::async_trait]
impl ReportGenerator for GatedReportGenerator {
    async fn generate(
        &self,
        company_input: &str,
        sector: Option<&str>,
    ) -> Result<String, ReportGeneratorError> {
        let mut gate = self.gate.clone();
        while !*gate.borrow_and_update() {
            gate.changed()
                .await
                .map_err(|_| ReportGeneratorError::Failed("gate dropped".to_string()))?;
        }
        Ok(format!(
            "Report for {} ({})",
            company_input,
            sector.unwrap_or("no sector")
        ))
    }
}

/// Returns the same text for every company.
pub struct StaticReportGenerator(pub String);

#[async_trait::async_trait]
impl ReportGenerator for StaticReportGenerator {
    async fn generate(
        &self,
        _company_input: &str,
        _sector: Option<&str>,
    ) -> Result<String, ReportGeneratorError> {
        Ok(self.0.clone())
    }
}

/// Fails for one company and succeeds for every other.
pub struct SelectiveReportGenerator {
    pub failing_company: String,
}

#[async_trait::async_trait]
impl ReportGenerator for SelectiveReportGenerator {
    async fn generate(
        &self,
        company_input: &str,
        _sector: Option<&str>,
    ) -> Result<String, ReportGeneratorError> {
        if company_input == self.failing_company {
            return Err(ReportGeneratorError::Failed(format!(
                "no data for {}",
                company_input
            )));
        }
        Ok(format!("Report for {}", company_input))
    }
}

pub struct PanickingReportGenerator;

#[async_trait::async_trait]
impl ReportGenerator for PanickingReportGenerator {
    async fn generate(
        &self,
        _company_input: &str,
        _sector: Option<&str>,
    ) -> Result<String, ReportGeneratorError> {
        panic!("generator exploded");
    }
}

pub fn job_store(max_jobs: usize) -> Arc<dyn JobStore> {
    Arc::new(InMemoryJobStore::new(max_jobs))
}

pub fn dispatcher(
    job_store: &Arc<dyn JobStore>,
    generator: Arc<dyn ReportGenerator>,
) -> AnalysisDispatcher {
    AnalysisDispatcher::new(Arc::clone(job_store), generator)
}

pub fn create_test_app(
    generator: Arc<dyn ReportGenerator>,
    max_jobs: usize,
) -> (axum::Router, Arc<dyn JobStore>) {
    let job_store = job_store(max_jobs);
    let state = AppState {
        dispatcher: Arc::new(dispatcher(&job_store, generator)),
        job_store: Arc::clone(&job_store),
    };
    (create_router(state), job_store)
}

pub async fn wait_for_terminal(job_store: &Arc<dyn JobStore>, id: JobId) -> Job {
    for _ in 0..500 {
        if let Some(job) = job_store.get(id).await.unwrap() {
            if job.status().is_terminal() {
                return job;
            }
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("job {} did not reach a terminal state", id);
}
