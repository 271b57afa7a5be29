use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use request::RequestConfiguration;
use response::UsageMetadata;
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

use crate::AppState;
use crate::error::{AppError, InvalidRequest};
use crate::page::EMPTY_PROMPT_WARNING;

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<UsageMetadata>,
}

pub async fn v1_generate(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RequestConfiguration>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    info!(
        "Received v1/generate request for model: {}",
        state.provider.model()
    );

    let Json(payload) = payload.map_err(|rejection| {
        warn!("Rejected v1/generate body: {}", rejection.body_text());
        InvalidRequest(rejection.body_text())
    })?;

    if !payload.has_prompt() {
        return Err(InvalidRequest(EMPTY_PROMPT_WARNING.to_string()).into());
    }
    payload
        .validate()
        .map_err(|e| InvalidRequest(e.to_string()))?;

    let generated = state.provider.generate_text(&payload).await?;

    Ok((
        StatusCode::OK,
        Json(GenerateResponse {
            text: generated.text,
            finish_reason: generated.finish_reason,
            model_version: generated.model_version,
            usage: generated.usage,
        }),
    ))
}
