use common::{MAX_OUTPUT_TOKENS, SamplingDefaults, SliderRange, TEMPERATURE, TOP_K, TOP_P};
use handlebars::Handlebars;
use serde::Serialize;

use crate::form::GenerateForm;

const PLAYGROUND_TEMPLATE_NAME: &str = "playground";
const PLAYGROUND_TEMPLATE: &str = include_str!("../templates/playground.hbs");

pub const EMPTY_PROMPT_WARNING: &str = "Please enter a prompt first.";

/// What the output area shows after a Generate action.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Response(String),
    Warning(String),
    Error(String),
}

impl Outcome {
    pub fn error(error: &anyhow::Error) -> Self {
        Self::Error(format!("🚨 Error: {error:#}"))
    }
}

#[derive(Debug, Serialize)]
pub struct OutcomeView {
    kind: &'static str,
    heading: Option<&'static str>,
    text: String,
}

impl From<Outcome> for OutcomeView {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Response(text) => Self {
                kind: "response",
                heading: Some("✨ Response"),
                text,
            },
            Outcome::Warning(text) => Self {
                kind: "warning",
                heading: None,
                text,
            },
            Outcome::Error(text) => Self {
                kind: "error",
                heading: None,
                text,
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SliderView {
    name: &'static str,
    label: &'static str,
    help: &'static str,
    min: String,
    max: String,
    step: String,
    value: String,
}

impl SliderView {
    fn float(range: &SliderRange<f32>, value: &str) -> Self {
        Self {
            name: range.name,
            label: range.label,
            help: range.help,
            min: format!("{:.2}", range.min),
            max: format!("{:.2}", range.max),
            step: format!("{:.2}", range.step),
            value: value.to_string(),
        }
    }

    fn integer(range: &SliderRange<u32>, value: &str) -> Self {
        Self {
            name: range.name,
            label: range.label,
            help: range.help,
            min: range.min.to_string(),
            max: range.max.to_string(),
            step: range.step.to_string(),
            value: value.to_string(),
        }
    }
}

/// Everything the playground template needs for one render.
#[derive(Debug, Serialize)]
pub struct PageView {
    model: String,
    sliders: Vec<SliderView>,
    system_instruction: String,
    prompt: String,
    outcome: Option<OutcomeView>,
}

impl PageView {
    /// Fresh panel showing the configured defaults.
    pub fn initial(model: &str, defaults: &SamplingDefaults) -> Self {
        Self::from_form(model, &GenerateForm::from_defaults(defaults), defaults)
    }

    /// Panel echoing what was just submitted; blank slider fields fall back to defaults.
    pub fn from_form(model: &str, form: &GenerateForm, defaults: &SamplingDefaults) -> Self {
        let or_default = |submitted: &str, default: String| {
            let submitted = submitted.trim();
            if submitted.is_empty() {
                default
            } else {
                submitted.to_string()
            }
        };

        let sliders = vec![
            SliderView::float(
                &TEMPERATURE,
                &or_default(&form.temperature, format!("{:.2}", defaults.temperature)),
            ),
            SliderView::integer(
                &MAX_OUTPUT_TOKENS,
                &or_default(&form.max_output_tokens, defaults.max_output_tokens.to_string()),
            ),
            SliderView::integer(
                &TOP_K,
                &or_default(&form.top_k, defaults.top_k.to_string()),
            ),
            SliderView::float(
                &TOP_P,
                &or_default(&form.top_p, format!("{:.2}", defaults.top_p)),
            ),
        ];

        Self {
            model: model.to_string(),
            sliders,
            system_instruction: form.system_instruction.clone(),
            prompt: form.prompt.clone(),
            outcome: None,
        }
    }

    pub fn with_outcome(mut self, outcome: Outcome) -> Self {
        self.outcome = Some(outcome.into());
        self
    }
}

pub struct PageRenderer {
    handlebars: Handlebars<'static>,
}

impl PageRenderer {
    pub fn new() -> anyhow::Result<Self> {
        let mut handlebars = Handlebars::new();
        handlebars.register_template_string(PLAYGROUND_TEMPLATE_NAME, PLAYGROUND_TEMPLATE)?;
        Ok(Self { handlebars })
    }

    pub fn render(&self, view: &PageView) -> anyhow::Result<String> {
        Ok(self.handlebars.render(PLAYGROUND_TEMPLATE_NAME, view)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(view: &PageView) -> String {
        PageRenderer::new().unwrap().render(view).unwrap()
    }

    #[test]
    fn initial_page_shows_panel_defaults() {
        let html = render(&PageView::initial(
            "gemini-2.0-pro",
            &SamplingDefaults::default(),
        ));

        assert!(html.contains(r#"name="temperature""#));
        assert!(html.contains(r#"value="0.70""#));
        assert!(html.contains(r#"name="max_output_tokens""#));
        assert!(html.contains(r#"min="100""#));
        assert!(html.contains(r#"max="2048""#));
        assert!(html.contains(r#"value="512""#));
        assert!(html.contains(r#"value="40""#));
        assert!(html.contains(r#"value="0.90""#));
        assert!(html.contains("You are a helpful assistant."));
        assert!(html.contains("Model: gemini-2.0-pro"));
        assert!(!html.contains(r#"class="outcome"#));
    }

    #[test]
    fn submitted_values_are_echoed_back() {
        let form = GenerateForm {
            prompt: "Tell me a story".to_string(),
            system_instruction: String::new(),
            temperature: "0.15".to_string(),
            max_output_tokens: String::new(),
            top_k: "3".to_string(),
            top_p: "0.5".to_string(),
        };

        let html = render(&PageView::from_form(
            "gemini-2.0-pro",
            &form,
            &SamplingDefaults::default(),
        ));

        assert!(html.contains("Tell me a story"));
        assert!(html.contains(r#"value="0.15""#));
        assert!(html.contains(r#"value="512""#));
        assert!(html.contains(r#"value="3""#));
        assert!(!html.contains("You are a helpful assistant."));
    }

    #[test]
    fn outcome_text_is_html_escaped() {
        let view = PageView::initial("gemini-2.0-pro", &SamplingDefaults::default())
            .with_outcome(Outcome::Response("<script>alert(1)</script>".to_string()));

        let html = render(&view);
        assert!(html.contains("✨ Response"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!html.contains("<script>alert(1)</script>"));
    }

    #[test]
    fn warning_and_error_outcomes_render_with_their_kind() {
        let defaults = SamplingDefaults::default();

        let warning = render(
            &PageView::initial("m", &defaults)
                .with_outcome(Outcome::Warning(EMPTY_PROMPT_WARNING.to_string())),
        );
        assert!(warning.contains(r#"class="outcome warning""#));
        assert!(warning.contains(EMPTY_PROMPT_WARNING));
        assert!(!warning.contains("✨ Response"));

        let error = render(
            &PageView::initial("m", &defaults)
                .with_outcome(Outcome::error(&anyhow::anyhow!("boom"))),
        );
        assert!(error.contains(r#"class="outcome error""#));
        assert!(error.contains("🚨 Error: boom"));
    }
}
