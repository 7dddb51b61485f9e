// HTTP request handlers

use super::routes::AppState;
use crate::error::ExtractError;
use crate::extraction;
use crate::models::relay::{ExtractRequest, ExtractResponse};
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, error, info};

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub checks: HashMap<String, HealthCheck>,
    pub timestamp: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheck {
    pub status: String,
    pub message: String,
}

pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let mut checks = HashMap::new();
    let mut overall_status = HealthStatus::Healthy;

    // Check upstream credential
    let key_check = if state.gemini_client.has_api_key() {
        HealthCheck {
            status: "ok".to_string(),
            message: "API key configured".to_string(),
        }
    } else {
        overall_status = HealthStatus::Unhealthy;
        HealthCheck {
            status: "error".to_string(),
            message: "GEMINI_API_KEY is not set".to_string(),
        }
    };
    checks.insert("api_key".to_string(), key_check);

    // Check configuration
    let config_check = HealthCheck {
        status: "ok".to_string(),
        message: format!(
            "API base: {}, model: {}",
            state.config.gemini.api_base_url, state.config.gemini.model
        ),
    };
    checks.insert("configuration".to_string(), config_check);

    Json(HealthResponse {
        status: overall_status,
        checks,
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Fallback for non-POST verbs on the extract route
pub async fn method_not_allowed_handler() -> ExtractError {
    ExtractError::MethodNotAllowed
}

/// Handler for the extract endpoint.
///
/// Validates the inbound request, forwards the image to Gemini with the
/// fixed extraction instruction, and relays the recovered JSON object.
pub async fn extract_handler(
    State(state): State<AppState>,
    body: String, // Get raw JSON as string first
) -> Result<Json<ExtractResponse>, ExtractError> {
    // Credential check comes before body parsing, so an unconfigured
    // deployment rejects every request the same way
    if !state.gemini_client.has_api_key() {
        return Err(ExtractError::MissingApiKey);
    }

    debug!(
        "Raw request JSON (first 200 chars): {}",
        body.chars().take(200).collect::<String>()
    );

    // Manually deserialize to get better error messages
    let req: ExtractRequest = serde_json::from_str(&body).map_err(|e| {
        ExtractError::InvalidRequest(format!("JSON deserialization error: {}", e))
    })?;

    let image_data = req
        .image_data
        .filter(|data| !data.is_empty())
        .ok_or(ExtractError::MissingImage)?;

    info!(
        "Received extraction request: {} bytes of image data, mime_type={}",
        image_data.len(),
        req.mime_type.as_deref().unwrap_or(extraction::DEFAULT_MIME_TYPE)
    );

    match run_extraction(&state, image_data, req.mime_type).await {
        Ok(data) => Ok(Json(ExtractResponse {
            success: true,
            data,
        })),
        Err(e) => {
            error!("Extraction error: {}", e);
            Err(e)
        }
    }
}

/// One outbound call plus payload recovery
async fn run_extraction(
    state: &AppState,
    image_data: String,
    mime_type: Option<String>,
) -> Result<Value, ExtractError> {
    let gemini_req = extraction::build_request(image_data, mime_type);
    let gemini_resp = state.gemini_client.generate_content(gemini_req).await?;
    extraction::recover_payload(gemini_resp)
}
