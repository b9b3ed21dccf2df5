mod llm_report_generator;
mod mock_report_generator;
mod report_prompts;

pub use llm_report_generator::LlmReportGenerator;
pub use mock_report_generator::MockReportGenerator;
