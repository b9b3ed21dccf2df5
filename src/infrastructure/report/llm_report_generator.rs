use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{LlmClient, ReportGenerator, ReportGeneratorError};
use crate::infrastructure::observability::sanitize_prompt;

use super::report_prompts::{
    DATA_ANALYST_ROLE, NEWS_ANALYST_ROLE, RESEARCH_DIRECTOR_ROLE, data_analysis_prompt,
    news_research_prompt, synthesis_prompt,
};

/// Builds a report in three sequential LLM stages: data analysis, news
/// research, then a synthesis that receives both earlier outputs.
pub struct LlmReportGenerator {
    llm_client: Arc<dyn LlmClient>,
}

impl LlmReportGenerator {
    pub fn new(llm_client: Arc<dyn LlmClient>) -> Self {
        Self { llm_client }
    }

    async fn run_stage(
        &self,
        stage: &'static str,
        prompt: &str,
        role: &str,
    ) -> Result<String, ReportGeneratorError> {
        tracing::debug!(stage, prompt = %sanitize_prompt(prompt), "Running report stage");
        let output = self
            .llm_client
            .complete(prompt, role)
            .await
            .map_err(|source| ReportGeneratorError::Stage { stage, source })?;
        tracing::debug!(stage, chars = output.len(), "Report stage finished");
        Ok(output)
    }
}

#[async_trait]
impl ReportGenerator for LlmReportGenerator {
    #[tracing::instrument(skip(self, company_input), fields(company = %sanitize_prompt(company_input)))]
    async fn generate(
        &self,
        company_input: &str,
        sector: Option<&str>,
    ) -> Result<String, ReportGeneratorError> {
        let data_analysis = self
            .run_stage(
                "data analysis",
                &data_analysis_prompt(company_input, sector),
                DATA_ANALYST_ROLE,
            )
            .await?;

        let news_research = self
            .run_stage(
                "news research",
                &news_research_prompt(company_input, sector),
                NEWS_ANALYST_ROLE,
            )
            .await?;

        self.run_stage(
            "synthesis",
            &synthesis_prompt(company_input, sector, &data_analysis, &news_research),
            RESEARCH_DIRECTOR_ROLE,
        )
        .await
    }
}
