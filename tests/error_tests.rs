// Error handling tests

use axum::http::StatusCode;
use axum::response::IntoResponse;
use gensen_extract::error::ExtractError;

#[test]
fn test_error_display_messages() {
    let errors = vec![
        ExtractError::MethodNotAllowed,
        ExtractError::MissingApiKey,
        ExtractError::MissingImage,
        ExtractError::InvalidRequest("bad body".to_string()),
        ExtractError::UpstreamApi("upstream failed".to_string()),
        ExtractError::MalformedResponse,
        ExtractError::Parse("expected value".to_string()),
        ExtractError::Config("bad config".to_string()),
    ];

    for error in errors {
        let display = format!("{}", error);
        assert!(!display.is_empty(), "Error should have display message");
    }
}

#[test]
fn test_upstream_status_message_contains_code() {
    let error = ExtractError::UpstreamStatus {
        status: 503,
        body: "service unavailable".to_string(),
    };
    let display = format!("{}", error);
    assert!(display.contains("503"));
    assert!(display.contains("service unavailable"));
}

#[test]
fn test_parse_error_carries_cause() {
    let error = ExtractError::Parse("expected value at line 1 column 1".to_string());
    assert!(format!("{}", error).contains("expected value"));
}

#[test]
fn test_method_not_allowed_status() {
    let response = ExtractError::MethodNotAllowed.into_response();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[test]
fn test_missing_image_status() {
    let response = ExtractError::MissingImage.into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn test_invalid_request_status() {
    let response = ExtractError::InvalidRequest("bad".to_string()).into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn test_missing_api_key_status() {
    let response = ExtractError::MissingApiKey.into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn test_upstream_failures_collapse_to_500() {
    let errors = vec![
        ExtractError::UpstreamStatus {
            status: 429,
            body: "quota".to_string(),
        },
        ExtractError::UpstreamApi("boom".to_string()),
        ExtractError::MalformedResponse,
        ExtractError::Parse("nope".to_string()),
    ];

    for error in errors {
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
