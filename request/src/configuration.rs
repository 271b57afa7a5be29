use common::{MAX_OUTPUT_TOKENS, TEMPERATURE, TOP_K, TOP_P};
use serde::{Deserialize, Serialize};

use crate::{GenerateContentRequest, GenerationConfig, content::Content};

/// How the system instruction reaches the model.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SystemInstructionMode {
    /// Sent as the dedicated `systemInstruction` field.
    #[default]
    Separate,
    /// Concatenated in front of the prompt inside the user turn.
    Prepend,
}

/// Everything one Generate action sends to the model. Built per submit,
/// dropped once the outcome is rendered.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct RequestConfiguration {
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<String>,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
    #[serde(default = "default_top_k")]
    pub top_k: u32,
    #[serde(default = "default_top_p")]
    pub top_p: f32,
}

fn default_temperature() -> f32 {
    TEMPERATURE.default
}

fn default_max_output_tokens() -> u32 {
    MAX_OUTPUT_TOKENS.default
}

fn default_top_k() -> u32 {
    TOP_K.default
}

fn default_top_p() -> f32 {
    TOP_P.default
}

impl RequestConfiguration {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            system_instruction: None,
            temperature: TEMPERATURE.default,
            max_output_tokens: MAX_OUTPUT_TOKENS.default,
            top_k: TOP_K.default,
            top_p: TOP_P.default,
        }
    }

    pub fn system_instruction(mut self, instruction: Option<String>) -> Self {
        self.system_instruction = instruction;
        self
    }

    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = max_output_tokens;
        self
    }

    pub fn top_k(mut self, top_k: u32) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn top_p(mut self, top_p: f32) -> Self {
        self.top_p = top_p;
        self
    }

    pub fn has_prompt(&self) -> bool {
        !self.prompt.trim().is_empty()
    }

    /// The system instruction, if it holds anything besides whitespace.
    pub fn effective_system_instruction(&self) -> Option<&str> {
        self.system_instruction
            .as_deref()
            .filter(|s| !s.trim().is_empty())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if !self.has_prompt() {
            anyhow::bail!("Prompt must not be empty");
        }
        TEMPERATURE.check(self.temperature)?;
        MAX_OUTPUT_TOKENS.check(self.max_output_tokens)?;
        TOP_K.check(self.top_k)?;
        TOP_P.check(self.top_p)?;
        Ok(())
    }

    pub fn to_generate_content_request(
        &self,
        mode: SystemInstructionMode,
    ) -> GenerateContentRequest {
        let generation_config = GenerationConfig {
            temperature: Some(self.temperature),
            max_output_tokens: Some(self.max_output_tokens),
            top_k: Some(self.top_k),
            top_p: Some(self.top_p),
        };

        let builder = GenerateContentRequest::builder().generation_config(generation_config);

        match (self.effective_system_instruction(), mode) {
            (Some(instruction), SystemInstructionMode::Separate) => builder
                .system_instruction(Some(Content::system(instruction)))
                .content(Content::user(self.prompt.clone()))
                .build(),
            (Some(instruction), SystemInstructionMode::Prepend) => builder
                .content(Content::user(format!("{instruction}\n\n{}", self.prompt)))
                .build(),
            (None, _) => builder.content(Content::user(self.prompt.clone())).build(),
        }
    }
}
