use serde::Deserialize;
use std::fmt::Display;

pub const API_KEY_ENV_VAR: &str = "GOOGLE_API_KEY";
pub const DEFAULT_MODEL: &str = "gemini-2.0-pro";
pub const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_SYSTEM_INSTRUCTION: &str = "You are a helpful assistant.";

/// Bounds, default and step of one settings-panel slider.
#[derive(Debug, Clone, Copy)]
pub struct SliderRange<T> {
    pub name: &'static str,
    pub label: &'static str,
    pub help: &'static str,
    pub min: T,
    pub max: T,
    pub default: T,
    pub step: T,
}

impl<T> SliderRange<T>
where
    T: PartialOrd + Copy + Display,
{
    pub fn contains(&self, value: T) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn check(&self, value: T) -> anyhow::Result<T> {
        // NaN fails both comparisons and lands here too
        if !self.contains(value) {
            anyhow::bail!(
                "{} must be between {} and {}, got {}",
                self.label,
                self.min,
                self.max,
                value
            );
        }
        Ok(value)
    }
}

pub const TEMPERATURE: SliderRange<f32> = SliderRange {
    name: "temperature",
    label: "Temperature",
    help: "Higher = more creative",
    min: 0.0,
    max: 1.0,
    default: 0.7,
    step: 0.01,
};

pub const MAX_OUTPUT_TOKENS: SliderRange<u32> = SliderRange {
    name: "max_output_tokens",
    label: "Max Output Tokens",
    help: "Limits response length",
    min: 100,
    max: 2048,
    default: 512,
    step: 1,
};

pub const TOP_K: SliderRange<u32> = SliderRange {
    name: "top_k",
    label: "Top-k",
    help: "Limits choices to top-k candidates",
    min: 1,
    max: 100,
    default: 40,
    step: 1,
};

pub const TOP_P: SliderRange<f32> = SliderRange {
    name: "top_p",
    label: "Top-p (Nucleus Sampling)",
    help: "Probability mass cutoff",
    min: 0.0,
    max: 1.0,
    default: 0.9,
    step: 0.01,
};

/// Initial values shown in the settings panel.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SamplingDefaults {
    pub temperature: f32,
    pub max_output_tokens: u32,
    pub top_k: u32,
    pub top_p: f32,
    pub system_instruction: String,
}

impl Default for SamplingDefaults {
    fn default() -> Self {
        Self {
            temperature: TEMPERATURE.default,
            max_output_tokens: MAX_OUTPUT_TOKENS.default,
            top_k: TOP_K.default,
            top_p: TOP_P.default,
            system_instruction: DEFAULT_SYSTEM_INSTRUCTION.to_string(),
        }
    }
}

impl SamplingDefaults {
    pub fn validate(&self) -> anyhow::Result<()> {
        TEMPERATURE.check(self.temperature)?;
        MAX_OUTPUT_TOKENS.check(self.max_output_tokens)?;
        TOP_K.check(self.top_k)?;
        TOP_P.check(self.top_p)?;
        Ok(())
    }
}
