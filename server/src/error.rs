use axum::{http::StatusCode, response::IntoResponse};
use std::{error::Error, fmt};

pub struct AppError(anyhow::Error);

/// A request the playground refuses before any remote call is made.
#[derive(Debug)]
pub struct InvalidRequest(pub String);

impl fmt::Display for InvalidRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Error for InvalidRequest {}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status_code = if self.0.downcast_ref::<InvalidRequest>().is_some() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        (status_code, format!("Error: {:#}", self.0)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
