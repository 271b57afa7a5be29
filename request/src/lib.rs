use serde::{Deserialize, Serialize};

pub mod configuration;
pub mod content;

pub use configuration::{RequestConfiguration, SystemInstructionMode};
pub use content::{Content, Part, Role};

/// Body of `POST /v1beta/models/{model}:generateContent`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
}

impl GenerateContentRequest {
    pub fn builder() -> GenerateContentRequestBuilder {
        GenerateContentRequestBuilder::default()
    }
}

#[derive(Default)]
pub struct GenerateContentRequestBuilder {
    contents: Vec<Content>,
    system_instruction: Option<Content>,
    generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequestBuilder {
    pub fn content(mut self, content: Content) -> Self {
        self.contents.push(content);
        self
    }

    pub fn system_instruction(mut self, system_instruction: Option<Content>) -> Self {
        self.system_instruction = system_instruction;
        self
    }

    pub fn generation_config(mut self, generation_config: GenerationConfig) -> Self {
        self.generation_config = Some(generation_config);
        self
    }

    pub fn build(self) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: self.contents,
            system_instruction: self.system_instruction,
            generation_config: self.generation_config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_generation_config_serializes_to_empty_object() {
        let request = GenerateContentRequest::builder()
            .content(Content::user("hi"))
            .generation_config(GenerationConfig::default())
            .build();

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["generationConfig"], serde_json::json!({}));
        assert!(json.get("systemInstruction").is_none());
    }

    #[test]
    fn builder_keeps_content_order() {
        let request = GenerateContentRequest::builder()
            .content(Content::user("first"))
            .content(Content::user("second"))
            .build();

        assert_eq!(request.contents[0].parts[0].text, "first");
        assert_eq!(request.contents[1].parts[0].text, "second");
        assert!(request.generation_config.is_none());
    }
}
