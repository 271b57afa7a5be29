use common::{MAX_OUTPUT_TOKENS, SamplingDefaults, SliderRange, TEMPERATURE, TOP_K, TOP_P};
use request::RequestConfiguration;
use serde::Deserialize;
use std::{fmt::Display, str::FromStr};

/// Raw `application/x-www-form-urlencoded` body of the Generate action.
///
/// Fields stay strings so malformed values reach the page as an error
/// message instead of an extractor rejection.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GenerateForm {
    pub prompt: String,
    pub system_instruction: String,
    pub temperature: String,
    pub max_output_tokens: String,
    pub top_k: String,
    pub top_p: String,
}

impl GenerateForm {
    pub fn from_defaults(defaults: &SamplingDefaults) -> Self {
        Self {
            prompt: String::new(),
            system_instruction: defaults.system_instruction.clone(),
            temperature: format!("{:.2}", defaults.temperature),
            max_output_tokens: defaults.max_output_tokens.to_string(),
            top_k: defaults.top_k.to_string(),
            top_p: format!("{:.2}", defaults.top_p),
        }
    }

    pub fn has_prompt(&self) -> bool {
        !self.prompt.trim().is_empty()
    }

    pub fn to_request_configuration(
        &self,
        defaults: &SamplingDefaults,
    ) -> anyhow::Result<RequestConfiguration> {
        let system_instruction = Some(self.system_instruction.clone())
            .filter(|s| !s.trim().is_empty());

        let configuration = RequestConfiguration::new(self.prompt.clone())
            .system_instruction(system_instruction)
            .temperature(parse_slider(&TEMPERATURE, &self.temperature, defaults.temperature)?)
            .max_output_tokens(parse_slider(
                &MAX_OUTPUT_TOKENS,
                &self.max_output_tokens,
                defaults.max_output_tokens,
            )?)
            .top_k(parse_slider(&TOP_K, &self.top_k, defaults.top_k)?)
            .top_p(parse_slider(&TOP_P, &self.top_p, defaults.top_p)?);

        configuration.validate()?;
        Ok(configuration)
    }
}

fn parse_slider<T>(range: &SliderRange<T>, raw: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr + PartialOrd + Copy + Display,
{
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(default);
    }

    let value = raw
        .parse::<T>()
        .map_err(|_| anyhow::anyhow!("{} must be a number, got '{}'", range.label, raw))?;

    range.check(value)
}
