use common::{API_KEY_ENV_VAR, DEFAULT_API_BASE_URL, DEFAULT_MODEL, SamplingDefaults};
use config::{Config, Environment, File};
use request::SystemInstructionMode;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub model: String,
    pub api_base_url: String,
    pub system_instruction_mode: SystemInstructionMode,
    pub request_timeout_secs: u64,
    pub defaults: SamplingDefaults,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8501,
            model: DEFAULT_MODEL.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            system_instruction_mode: SystemInstructionMode::default(),
            request_timeout_secs: 120,
            defaults: SamplingDefaults::default(),
        }
    }
}

impl Settings {
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        let settings: Settings = config.try_deserialize()?;
        settings.defaults.validate()?;
        if settings.request_timeout_secs == 0 {
            anyhow::bail!("request_timeout_secs must be greater than 0");
        }
        Ok(settings)
    }
}

/// Reads `config.{toml,yaml,json}` from the working directory if present,
/// then `PLAYGROUND_*` environment variables (`PLAYGROUND_DEFAULTS__TOP_K=20`).
pub fn load_config() -> anyhow::Result<Settings> {
    let config = Config::builder()
        .add_source(File::with_name("config").required(false))
        .add_source(
            Environment::with_prefix("PLAYGROUND")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let settings = Settings::from_config(config)?;

    info!(
        "model: {}, system_instruction_mode: {:?}, request_timeout_secs: {}",
        settings.model, settings.system_instruction_mode, settings.request_timeout_secs
    );

    Ok(settings)
}

pub fn missing_api_key_message() -> String {
    format!("API key not found. Make sure your .env file contains {API_KEY_ENV_VAR}.")
}

/// Loads `.env` from the working directory into the process environment.
/// Must run before `load_config` so `PLAYGROUND_*` entries there apply.
pub fn load_dotenv() {
    if let Err(e) = dotenv::dotenv() {
        debug!("No .env file loaded: {}", e);
    }
}

pub fn load_dotenv_from(path: &Path) {
    if let Err(e) = dotenv::from_path(path) {
        debug!("No .env file loaded from {}: {}", path.display(), e);
    }
}

pub fn read_api_key() -> Option<String> {
    std::env::var(API_KEY_ENV_VAR).ok()
}

pub fn require_api_key(value: Option<String>) -> anyhow::Result<String> {
    match value.as_deref().map(str::trim) {
        Some(key) if !key.is_empty() => Ok(key.to_string()),
        _ => anyhow::bail!(missing_api_key_message()),
    }
}
