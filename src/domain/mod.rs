mod analysis_request;
mod job;
mod job_id;
mod job_status;

pub use analysis_request::{AnalysisRequest, ValidationError};
pub use job::{Job, JobTransitionError};
pub use job_id::JobId;
pub use job_status::JobStatus;
