use async_trait::async_trait;
use common::DEFAULT_API_BASE_URL;
use request::{RequestConfiguration, SystemInstructionMode};
use response::{GenerateContentResponse, UsageMetadata};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info};

use crate::error::ApiError;
use crate::providers::{GeneratedText, GenerateTextProvider};

pub const API_KEY_HEADER: &str = "x-goog-api-key";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

type UsageCallback = Arc<dyn Fn(&UsageMetadata) + Send + Sync>;

/// Client handle bound to one model of the generative language API.
pub struct GeminiProvider {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
    system_instruction_mode: SystemInstructionMode,
    usage_callback: Option<UsageCallback>,
}

impl GeminiProvider {
    pub fn builder(api_key: &str, model: &str) -> GeminiProviderBuilder {
        GeminiProviderBuilder::new(api_key, model)
    }

    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

pub struct GeminiProviderBuilder {
    api_key: String,
    model: String,
    base_url: String,
    system_instruction_mode: SystemInstructionMode,
    timeout: Duration,
    usage_callback: Option<UsageCallback>,
}

impl GeminiProviderBuilder {
    pub fn new(api_key: &str, model: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            model: model.to_string(),
            base_url: DEFAULT_API_BASE_URL.to_string(),
            system_instruction_mode: SystemInstructionMode::default(),
            timeout: DEFAULT_TIMEOUT,
            usage_callback: None,
        }
    }

    pub fn base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn system_instruction_mode(mut self, mode: SystemInstructionMode) -> Self {
        self.system_instruction_mode = mode;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn usage_callback<F>(mut self, callback: F) -> Self
    where
        F: Fn(&UsageMetadata) + Send + Sync + 'static,
    {
        self.usage_callback = Some(Arc::new(callback));
        self
    }

    pub fn build(self) -> anyhow::Result<GeminiProvider> {
        if self.api_key.trim().is_empty() {
            anyhow::bail!("API key must not be empty");
        }
        if self.model.trim().is_empty() {
            anyhow::bail!("Model identifier must not be empty");
        }

        let client = reqwest::Client::builder().timeout(self.timeout).build()?;

        Ok(GeminiProvider {
            client,
            api_key: self.api_key,
            model: self.model,
            base_url: self.base_url,
            system_instruction_mode: self.system_instruction_mode,
            usage_callback: self.usage_callback,
        })
    }
}

#[async_trait]
impl GenerateTextProvider for GeminiProvider {
    async fn generate_text(
        &self,
        configuration: &RequestConfiguration,
    ) -> anyhow::Result<GeneratedText> {
        configuration.validate()?;

        let request = configuration.to_generate_content_request(self.system_instruction_mode);
        debug!(
            "Starting generateContent request with model: {}, temperature: {}, max_output_tokens: {}, top_k: {}, top_p: {}",
            self.model,
            configuration.temperature,
            configuration.max_output_tokens,
            configuration.top_k,
            configuration.top_p
        );

        let response = self
            .client
            .post(self.endpoint())
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        debug!("Gemini API response status: {}", status);

        if !status.is_success() {
            let error_text = response.text().await?;
            error!("Gemini API error: {} - {}", status, error_text);
            return Err(ApiError::from_body(status.as_u16(), &error_text).into());
        }

        let body: GenerateContentResponse = response.json().await?;

        if let (Some(usage), Some(callback)) = (body.usage(), &self.usage_callback) {
            callback(usage);
        }

        let text = body.text()?;
        info!(
            "Received {} characters from model: {}",
            text.chars().count(),
            self.model
        );

        Ok(GeneratedText {
            text,
            finish_reason: body.finish_reason().map(str::to_string),
            usage: body.usage_metadata.clone(),
            model_version: body.model_version.clone(),
        })
    }

    fn model(&self) -> &str {
        &self.model
    }
}
