// HTTP routes configuration

use super::handlers::{extract_handler, health_handler, method_not_allowed_handler};
use super::middleware::{cors_layer, envelope_payload_too_large, request_id_layers};
use crate::config::AppConfig;
use crate::error::Result;
use crate::gemini::GeminiClient;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub gemini_client: Arc<GeminiClient>,
}

pub fn create_router(config: AppConfig, gemini_client: GeminiClient) -> Result<Router> {
    let max_body_bytes = config.server.max_body_bytes;
    let state = AppState {
        config,
        gemini_client: Arc::new(gemini_client),
    };

    let (set_request_id, propagate_request_id) = request_id_layers();

    // The extract route answers every non-POST verb itself so callers get a
    // JSON 405 body instead of axum's bare fallback
    let app = Router::new()
        .route("/health", get(health_handler))
        .route(
            "/api/extract",
            post(extract_handler).fallback(method_not_allowed_handler),
        )
        // Allow large request bodies for base64-encoded slip images
        .layer(tower_http::limit::RequestBodyLimitLayer::new(max_body_bytes))
        .layer(axum::middleware::map_response(envelope_payload_too_large))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .layer(propagate_request_id)
        .layer(set_request_id)
        .with_state(state);

    Ok(app)
}
