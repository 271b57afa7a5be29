use response::ErrorResponse;
use std::{error::Error, fmt};

/// Non-2xx reply from the generative language API.
#[derive(Debug)]
pub struct ApiError {
    pub status: u16,
    pub message: String,
}

impl ApiError {
    /// Prefers the message from the JSON error envelope, falls back to the raw body.
    pub fn from_body(status: u16, body: &str) -> Self {
        let message = match serde_json::from_str::<ErrorResponse>(body) {
            Ok(envelope) if !envelope.error.message.is_empty() => envelope.to_string(),
            _ if body.trim().is_empty() => "empty response body".to_string(),
            _ => body.trim().to_string(),
        };

        Self { status, message }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Gemini API error: {} - {}", self.status, self.message)
    }
}

impl Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_body_uses_error_envelope() {
        let body = r#"{"error": {"code": 404, "message": "models/nope is not found", "status": "NOT_FOUND"}}"#;
        let error = ApiError::from_body(404, body);
        assert_eq!(
            error.to_string(),
            "Gemini API error: 404 - models/nope is not found (NOT_FOUND)"
        );
    }

    #[test]
    fn from_body_falls_back_to_raw_text() {
        let error = ApiError::from_body(502, "  Bad Gateway\n");
        assert_eq!(error.to_string(), "Gemini API error: 502 - Bad Gateway");
    }

    #[test]
    fn from_body_handles_empty_body() {
        let error = ApiError::from_body(500, "");
        assert_eq!(error.message, "empty response body");
    }
}
