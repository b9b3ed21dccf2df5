mod http_job_api;
mod job_poller;

pub use http_job_api::{DEFAULT_REQUEST_TIMEOUT, HttpJobApi};
pub use job_poller::{
    DEFAULT_MAX_ATTEMPTS, DEFAULT_POLL_INTERVAL, JobPoller, PollerSettings, PollerState,
};
