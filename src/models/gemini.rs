// Gemini generative language API type definitions
// Wire format per generativelanguage.googleapis.com/v1beta

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Gemini generate content request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateContentRequest {
    /// Conversation turns; a single user turn for one-shot extraction.
    pub contents: Vec<Content>,
}

/// Content in a turn (user or model)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    /// "user" or "model". Omitted on requests, present on responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// Individual part of content in a Gemini request/response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    /// Text content part.
    Text { text: String },

    /// Inline data (images, etc).
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

impl Part {
    /// Get text content if this is a Text part
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Part::Text { text } => Some(text),
            _ => None,
        }
    }
}

/// Inline image data for vision
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InlineData {
    #[serde(rename = "mimeType")]
    pub mime_type: String,
    pub data: String, // base64 encoded
}

/// Gemini response envelope.
///
/// A 2xx body may still carry an application-level `error` instead of
/// candidates, so both fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub error: Option<ApiError>,
}

/// Response candidate
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<Content>,
    pub finish_reason: Option<String>,
    pub safety_ratings: Option<Vec<Value>>,
}

/// Application-level error reported inside a response body.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    pub code: Option<i64>,
    pub message: Option<String>,
    pub status: Option<String>,
}

impl ApiError {
    /// Best-effort human-readable message
    pub fn message(&self) -> String {
        self.message
            .clone()
            .or_else(|| self.status.clone())
            .unwrap_or_else(|| "Unknown upstream error".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_format() {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: None,
                parts: vec![
                    Part::Text {
                        text: "describe".to_string(),
                    },
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: "image/png".to_string(),
                            data: "aGVsbG8=".to_string(),
                        },
                    },
                ],
            }],
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "describe");
        assert_eq!(
            json["contents"][0]["parts"][1]["inlineData"]["mimeType"],
            "image/png"
        );
        assert!(json["contents"][0].get("role").is_none());
    }

    #[test]
    fn test_response_with_candidates() {
        let body = r#"{
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "{}"}]},
                "finishReason": "STOP"
            }]
        }"#;

        let response: GenerateContentResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.candidates.len(), 1);
        assert!(response.error.is_none());
        let content = response.candidates[0].content.as_ref().unwrap();
        assert_eq!(content.parts[0].as_text(), Some("{}"));
    }

    #[test]
    fn test_response_with_error_field() {
        let body = r#"{"error": {"code": 429, "message": "Quota exceeded", "status": "RESOURCE_EXHAUSTED"}}"#;

        let response: GenerateContentResponse = serde_json::from_str(body).unwrap();
        assert!(response.candidates.is_empty());
        assert_eq!(response.error.unwrap().message(), "Quota exceeded");
    }
}
