// Error types for the extraction service

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("API key not configured")]
    MissingApiKey,

    #[error("No image data provided")]
    MissingImage,

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("API Error ({status}): {body}")]
    UpstreamStatus { status: u16, body: String },

    #[error("{0}")]
    UpstreamApi(String),

    #[error("Invalid response from AI model")]
    MalformedResponse,

    #[error("Failed to parse extracted content: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Config parsing error: {0}")]
    ConfigParsing(#[from] config::ConfigError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

// Convert ExtractError to HTTP responses for Axum.
// Upstream, shape, and parse failures all collapse into a generic 500
// carrying a best-effort message; only the caller-side rejections get
// distinct status codes.
impl IntoResponse for ExtractError {
    fn into_response(self) -> Response {
        let status = match self {
            ExtractError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ExtractError::MissingImage | ExtractError::InvalidRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = json!({
            "error": self.to_string(),
        });

        (status, axum::Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ExtractError>;
