// Inbound request and relay response envelopes

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of a POST to the extract endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ExtractRequest {
    /// Base64-encoded image of the withholding slip. Required; an absent or
    /// empty value is rejected before any upstream call.
    #[serde(rename = "imageData")]
    pub image_data: Option<String>,

    /// MIME type of the encoded image. Defaults to `image/jpeg`.
    #[serde(rename = "mimeType")]
    pub mime_type: Option<String>,
}

/// Success envelope returned to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractResponse {
    pub success: bool,
    pub data: Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inbound_field_names() {
        let request: ExtractRequest =
            serde_json::from_str(r#"{"imageData": "aGk=", "mimeType": "image/png"}"#).unwrap();
        assert_eq!(request.image_data.as_deref(), Some("aGk="));
        assert_eq!(request.mime_type.as_deref(), Some("image/png"));
    }

    #[test]
    fn test_mime_type_optional() {
        let request: ExtractRequest = serde_json::from_str(r#"{"imageData": "aGk="}"#).unwrap();
        assert!(request.mime_type.is_none());
    }
}
