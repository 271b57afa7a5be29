use axum::{
    Router,
    routing::{get, post},
};
use chat::{GeminiProvider, GenerateTextProvider};
use common::SamplingDefaults;
use std::sync::Arc;
use std::time::Duration;

pub mod error;
pub mod form;
pub mod handlers;
pub mod page;
pub mod settings;
pub mod utils;

use handlers::api::v1_generate;
use handlers::playground::{generate, index};
use page::PageRenderer;
use settings::{Settings, require_api_key};
use utils::usage_callback;

pub struct AppState {
    pub provider: Arc<dyn GenerateTextProvider>,
    pub defaults: SamplingDefaults,
    pub page: PageRenderer,
}

impl AppState {
    pub fn new(
        provider: Arc<dyn GenerateTextProvider>,
        defaults: SamplingDefaults,
    ) -> anyhow::Result<Self> {
        Ok(Self {
            provider,
            defaults,
            page: PageRenderer::new()?,
        })
    }
}

pub fn get_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/generate", post(generate))
        .route("/v1/generate", post(v1_generate))
        .with_state(state)
}

/// Binds the client handle to the configured model. Without a credential
/// no router is built, so the panel is never served.
pub fn build_app(settings: &Settings, api_key: Option<String>) -> anyhow::Result<Router> {
    let api_key = require_api_key(api_key)?;

    let provider = GeminiProvider::builder(&api_key, &settings.model)
        .base_url(&settings.api_base_url)
        .system_instruction_mode(settings.system_instruction_mode)
        .timeout(Duration::from_secs(settings.request_timeout_secs))
        .usage_callback(usage_callback)
        .build()?;

    let state = AppState::new(Arc::new(provider), settings.defaults.clone())?;
    Ok(get_app(Arc::new(state)))
}
