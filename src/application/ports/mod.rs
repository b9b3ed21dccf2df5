mod job_api;
mod job_store;
mod job_store_error;
mod llm_client;
mod report_generator;

pub use job_api::{JobApi, JobApiError, JobSnapshot};
pub use job_store::JobStore;
pub use job_store_error::JobStoreError;
pub use llm_client::{LlmClient, LlmClientError};
pub use report_generator::{ReportGenerator, ReportGeneratorError};
