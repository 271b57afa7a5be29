use async_trait::async_trait;
use request::RequestConfiguration;
use response::UsageMetadata;

pub mod gemini;

/// Text returned by one generate call plus what the API reported about it.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedText {
    pub text: String,
    pub finish_reason: Option<String>,
    pub usage: Option<UsageMetadata>,
    pub model_version: Option<String>,
}

impl GeneratedText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            finish_reason: None,
            usage: None,
            model_version: None,
        }
    }
}

#[async_trait]
pub trait GenerateTextProvider: Send + Sync {
    /// Issues exactly one remote call. No retries.
    async fn generate_text(
        &self,
        configuration: &RequestConfiguration,
    ) -> anyhow::Result<GeneratedText>;

    fn model(&self) -> &str;
}
