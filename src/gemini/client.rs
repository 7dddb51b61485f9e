// Gemini generative language API client

use crate::config::GeminiConfig;
use crate::error::{ExtractError, Result};
use crate::models::gemini::{GenerateContentRequest, GenerateContentResponse};
use crate::utils::logging;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error};

/// Client for the Gemini generative language API.
///
/// Holds the pooled HTTP client and the upstream settings. Each extraction
/// maps to exactly one `generateContent` call; there is no retry layer.
pub struct GeminiClient {
    http_client: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    /// Create a new Gemini client with a pooled, keep-alive HTTP client.
    pub fn new(config: &GeminiConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(10))
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Some(Duration::from_secs(60)))
            .tcp_nodelay(true)
            .use_rustls_tls()
            .build()
            .map_err(|e| ExtractError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        debug!("Created HTTP client with connection pooling and keep-alive");

        Ok(Self {
            http_client,
            config: config.clone(),
        })
    }

    /// Whether an upstream API key is configured.
    pub fn has_api_key(&self) -> bool {
        self.config.api_key.is_some()
    }

    /// Get the configured model name
    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Get the API base URL
    pub fn base_url(&self) -> &str {
        &self.config.api_base_url
    }

    /// Call the Gemini `generateContent` API once and decode the envelope.
    ///
    /// Non-2xx responses surface as an error carrying the upstream status
    /// and body text; no retry is attempted.
    pub async fn generate_content(
        &self,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(ExtractError::MissingApiKey)?;

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.config.api_base_url,
            self.config.model,
            urlencoding::encode(api_key)
        );
        debug!("Calling generateContent API for model: {}", self.config.model);

        let response = self
            .http_client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            // reqwest errors embed the request URL, which carries the key
            .map_err(|e| {
                ExtractError::UpstreamApi(logging::sanitize(&format!("HTTP error: {}", e)))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(
                "Gemini API error: HTTP {} - Response body: {}",
                status, error_text
            );
            return Err(ExtractError::UpstreamStatus {
                status: status.as_u16(),
                body: error_text,
            });
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| ExtractError::UpstreamApi(format!("Failed to read response body: {}", e)))?;

        debug!(
            "Raw Gemini response (first 500 chars): {}",
            response_text.chars().take(500).collect::<String>()
        );

        let gemini_response: GenerateContentResponse = serde_json::from_str(&response_text)
            .map_err(|e| {
                error!("Failed to parse Gemini response: {}", e);
                ExtractError::UpstreamApi(format!("Response parsing error: {}", e))
            })?;

        debug!("Successfully received Gemini response");
        Ok(gemini_response)
    }
}
