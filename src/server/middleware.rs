// HTTP middleware

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};

/// Create request ID layers for the application
pub fn request_id_layers() -> (SetRequestIdLayer<MakeRequestUuid>, PropagateRequestIdLayer) {
    (
        SetRequestIdLayer::x_request_id(MakeRequestUuid),
        PropagateRequestIdLayer::x_request_id(),
    )
}

/// CORS layer for browser callers uploading slips from a frontend page
pub fn cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}

/// Rewrite the body-limit layer's bare 413 into the `{ "error": ... }`
/// envelope every other failure uses
pub async fn envelope_payload_too_large(response: Response) -> Response {
    if response.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return (
            StatusCode::PAYLOAD_TOO_LARGE,
            axum::Json(json!({"error": "Request body too large"})),
        )
            .into_response();
    }
    response
}
