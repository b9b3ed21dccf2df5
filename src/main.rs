use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use finsight::application::ports::{JobStore, LlmClient, ReportGenerator};
use finsight::application::services::AnalysisDispatcher;
use finsight::infrastructure::llm::OpenAiClient;
use finsight::infrastructure::observability::{TracingConfig, init_tracing};
use finsight::infrastructure::persistence::InMemoryJobStore;
use finsight::infrastructure::report::{LlmReportGenerator, MockReportGenerator};
use finsight::presentation::{AppState, ScaffoldConfig, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (environment, settings) = Settings::load().context("Failed to load settings")?;
    let scaffold_config = ScaffoldConfig::default();

    init_tracing(&TracingConfig::from_settings(
        environment,
        &settings.logging,
    ))?;

    settings.validate(scaffold_config.enabled)?;

    let report_generator: Arc<dyn ReportGenerator> = if scaffold_config.enabled {
        tracing::warn!(
            delay_ms = scaffold_config.mock_response_delay_ms,
            "Scaffold mode: reports are canned, no LLM calls are made"
        );
        Arc::new(MockReportGenerator::new(scaffold_config.report_delay()))
    } else {
        let llm_client: Arc<dyn LlmClient> = Arc::new(OpenAiClient::from_settings(&settings.llm)?);
        tracing::info!(
            provider = %settings.llm.provider,
            model = %settings.llm.chat_model,
            timeout_seconds = settings.llm.timeout_seconds,
            "LLM report generator configured"
        );
        Arc::new(LlmReportGenerator::new(llm_client))
    };

    let job_store: Arc<dyn JobStore> = Arc::new(InMemoryJobStore::new(settings.jobs.max_jobs));
    let dispatcher = Arc::new(AnalysisDispatcher::new(
        Arc::clone(&job_store),
        report_generator,
    ));

    let state = AppState {
        dispatcher,
        job_store,
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server.host / server.port")?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
