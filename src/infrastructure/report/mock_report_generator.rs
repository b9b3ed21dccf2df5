use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{ReportGenerator, ReportGeneratorError};

/// Canned generator for scaffold mode and tests.
pub struct MockReportGenerator {
    delay: Duration,
    failure: Option<String>,
}

impl MockReportGenerator {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            failure: None,
        }
    }

    /// A generator that always fails with `message` after the delay.
    pub fn failing(delay: Duration, message: impl Into<String>) -> Self {
        Self {
            delay,
            failure: Some(message.into()),
        }
    }
}

#[async_trait]
impl ReportGenerator for MockReportGenerator {
    async fn generate(
        &self,
        company_input: &str,
        sector: Option<&str>,
    ) -> Result<String, ReportGeneratorError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        if let Some(message) = &self.failure {
            return Err(ReportGeneratorError::Failed(message.clone()));
        }

        let sector_line = sector
            .map(|s| format!(" in the {} sector", s))
            .unwrap_or_default();
        Ok(format!(
            "# EXECUTIVE SUMMARY\nScaffold report for {}{}.\n\n# INVESTMENT OUTLOOK\nHold.",
            company_input, sector_line
        ))
    }
}
