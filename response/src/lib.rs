use serde::{Deserialize, Serialize};
use std::fmt;

/// Successful `generateContent` reply.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_feedback: Option<PromptFeedback>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_metadata: Option<UsageMetadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<CandidateContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
    #[serde(default)]
    pub index: i32,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CandidatePart {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_reason: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: i32,
    #[serde(default)]
    pub candidates_token_count: i32,
    #[serde(default)]
    pub total_token_count: i32,
}

impl GenerateContentResponse {
    /// Joined text of the first candidate.
    pub fn text(&self) -> anyhow::Result<String> {
        let Some(candidate) = self.candidates.first() else {
            if let Some(reason) = self
                .prompt_feedback
                .as_ref()
                .and_then(|f| f.block_reason.as_deref())
            {
                anyhow::bail!("prompt was blocked: {reason}");
            }
            anyhow::bail!("response contained no candidates");
        };

        let text: String = candidate
            .content
            .iter()
            .flat_map(|c| c.parts.iter())
            .filter_map(|p| p.text.as_deref())
            .collect();

        if text.is_empty() {
            anyhow::bail!(
                "response contained no text (finish reason: {})",
                candidate.finish_reason.as_deref().unwrap_or("unknown")
            );
        }

        Ok(text)
    }

    pub fn finish_reason(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|c| c.finish_reason.as_deref())
    }

    pub fn usage(&self) -> Option<&UsageMetadata> {
        self.usage_metadata.as_ref()
    }
}

/// Error envelope returned with non-2xx statuses.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub code: i32,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: String,
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.error.status.is_empty() {
            write!(f, "{}", self.error.message)
        } else {
            write!(f, "{} ({})", self.error.message, self.error.status)
        }
    }
}
