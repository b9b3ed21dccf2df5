use async_trait::async_trait;

use super::LlmClientError;

/// Produces the research report text for one company.
#[async_trait]
pub trait ReportGenerator: Send + Sync {
    async fn generate(
        &self,
        company_input: &str,
        sector: Option<&str>,
    ) -> Result<String, ReportGeneratorError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ReportGeneratorError {
    #[error("{stage} stage failed: {source}")]
    Stage {
        stage: &'static str,
        #[source]
        source: LlmClientError,
    },
    #[error("report generation failed: {0}")]
    Failed(String),
}
