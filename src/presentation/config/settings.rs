use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File};
use serde::Deserialize;

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub llm: LlmSettings,
    pub jobs: JobSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    pub provider: String,
    pub api_key: String,
    pub base_url: Option<String>,
    pub chat_model: String,
    pub max_tokens: usize,
    pub temperature: f32,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JobSettings {
    pub max_jobs: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Environment(String),
    #[error("llm.api_key is required for the openai provider (set APP_LLM__API_KEY)")]
    MissingApiKey,
}

impl Settings {
    /// Loads `.env`, resolves `APP_ENVIRONMENT` (default `local`) and layers
    /// defaults, `appsettings.{Environment}` and `APP_*` variables.
    pub fn load() -> Result<(Environment, Self), SettingsError> {
        dotenvy::dotenv().ok();

        let environment: Environment = std::env::var("APP_ENVIRONMENT")
            .unwrap_or_else(|_| "local".into())
            .try_into()
            .map_err(SettingsError::Environment)?;

        let settings = Self::builder(environment)?
            .build()?
            .try_deserialize::<Settings>()?;

        Ok((environment, settings))
    }

    /// Every key has a default so the service boots without a settings file.
    /// Nested keys come from variables such as `APP_SERVER__PORT`.
    pub fn builder(
        environment: Environment,
    ) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Ok(Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080_i64)?
            .set_default("llm.provider", "openai")?
            .set_default("llm.api_key", "")?
            .set_default("llm.chat_model", "gpt-4o-mini")?
            .set_default("llm.max_tokens", 4096_i64)?
            .set_default("llm.temperature", 0.2_f64)?
            .set_default("llm.timeout_seconds", 60_i64)?
            .set_default("jobs.max_jobs", 10_000_i64)?
            .set_default("logging.level", "info")?
            .set_default("logging.enable_json", false)?
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            ))
    }

    /// The real generator cannot run without credentials; scaffold mode can.
    pub fn validate(&self, scaffold_enabled: bool) -> Result<(), SettingsError> {
        if !scaffold_enabled && self.llm.provider == "openai" && self.llm.api_key.trim().is_empty()
        {
            return Err(SettingsError::MissingApiKey);
        }
        Ok(())
    }
}
