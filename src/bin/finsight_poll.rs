//! Submits one analysis to a running FinSight server and waits for the report.

use std::sync::Arc;
use std::time::Duration;

use anyhow::bail;
use clap::Parser;

use finsight::infrastructure::client::{
    DEFAULT_POLL_INTERVAL, DEFAULT_REQUEST_TIMEOUT, HttpJobApi, JobPoller, PollerSettings,
    PollerState,
};
use finsight::infrastructure::observability::{TracingConfig, init_tracing};

#[derive(Parser, Debug)]
#[command(name = "finsight-poll")]
#[command(about = "Request a FinSight research report and wait for it")]
struct Args {
    /// Company name or ticker symbol.
    company: String,

    /// Optional sector used as extra context for the analysis.
    sector: Option<String>,

    /// Base URL of the FinSight server.
    #[arg(long, env = "FINSIGHT_API_URL", default_value = "http://127.0.0.1:8080")]
    api_url: String,

    /// Seconds between status checks.
    #[arg(long, default_value_t = DEFAULT_POLL_INTERVAL.as_secs())]
    interval_secs: u64,

    /// Give up after this many status checks (0 polls until the job finishes).
    #[arg(long)]
    max_attempts: Option<u32>,

    /// Per-request timeout in seconds.
    #[arg(long, default_value_t = DEFAULT_REQUEST_TIMEOUT.as_secs())]
    request_timeout_secs: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(&TracingConfig::default())?;

    let mut settings = PollerSettings {
        interval: Duration::from_secs(args.interval_secs),
        ..PollerSettings::default()
    };
    if let Some(max_attempts) = args.max_attempts {
        settings.max_attempts = (max_attempts > 0).then_some(max_attempts);
    }

    let api = HttpJobApi::new(
        args.api_url,
        Duration::from_secs(args.request_timeout_secs),
    )?;
    let mut poller = JobPoller::new(Arc::new(api), settings);

    if let PollerState::Polling { job_id, .. } =
        poller.submit(&args.company, args.sector.as_deref()).await
    {
        tracing::info!(job_id = %job_id, "Analysis started, polling for status");
    }

    match poller.run_to_completion().await {
        PollerState::ShowingResult { report, .. } => {
            println!("{}", report);
            Ok(())
        }
        PollerState::ShowingError { message, .. } => bail!("{}", message),
        state => bail!("poller stopped in unexpected state: {:?}", state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_company_and_sector_when_parsing_then_uses_server_default() {
        let args = Args::try_parse_from(["finsight-poll", "Apple", "Technology"]).unwrap();

        assert_eq!(args.company, "Apple");
        assert_eq!(args.sector.as_deref(), Some("Technology"));
        assert_eq!(args.interval_secs, 2);
        assert_eq!(args.request_timeout_secs, 10);
        assert!(args.max_attempts.is_none());
    }

    #[test]
    fn given_api_url_flag_when_parsing_then_overrides_server() {
        let args = Args::try_parse_from([
            "finsight-poll",
            "--api-url",
            "http://example.test:9000",
            "Tesla",
        ])
        .unwrap();

        assert_eq!(args.api_url, "http://example.test:9000");
        assert!(args.sector.is_none());
    }

    #[test]
    fn given_help_flag_when_parsing_then_does_not_treat_it_as_company() {
        let err = Args::try_parse_from(["finsight-poll", "--help"]).unwrap_err();

        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn given_no_company_when_parsing_then_usage_error() {
        let err = Args::try_parse_from(["finsight-poll"]).unwrap_err();

        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }
}
