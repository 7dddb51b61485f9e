// Slip extraction: outbound payload construction and response recovery
//
// The instruction text enumerates the fields of a Japanese tax withholding
// slip (源泉徴収票) and is business content; it is kept verbatim rather than
// templated.

use crate::error::{ExtractError, Result};
use crate::models::gemini::{
    Content, GenerateContentRequest, GenerateContentResponse, InlineData, Part,
};
use serde_json::Value;

/// Extraction instruction sent alongside the image on every call.
pub const EXTRACTION_PROMPT: &str = "Extract ALL fields from this Japanese tax withholding slip (源泉徴収票) to JSON format. Include: furigana, name, dob_year, dob_month, dob_day, address, my_number, payment_amount (支払金額), salary_after_deduction (給与所得控除後の金額), total_deductions (所得控除の額の合計額), withholding_tax (源泉徴収税額), social_insurance (社会保険料等の金額), life_insurance_old (生命保険料控除額 old), life_insurance_new (生命保険料控除額 new), earthquake_insurance (地震保険料控除額), spouse_deduction (配偶者控除), dependent_deduction (扶養控除), company_name (氏名又は名称), company_address (所在地), company_number (個人番号又は法人番号). Use 0 for missing numbers and empty string for missing text.";

/// MIME type assumed when the caller does not supply one.
pub const DEFAULT_MIME_TYPE: &str = "image/jpeg";

/// Build the outbound `generateContent` payload: the fixed instruction plus
/// the caller's image as inline data, in a single user turn.
pub fn build_request(image_data: String, mime_type: Option<String>) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content {
            role: None,
            parts: vec![
                Part::Text {
                    text: EXTRACTION_PROMPT.to_string(),
                },
                Part::InlineData {
                    inline_data: InlineData {
                        mime_type: mime_type.unwrap_or_else(|| DEFAULT_MIME_TYPE.to_string()),
                        data: image_data,
                    },
                },
            ],
        }],
    }
}

/// Recover the extracted JSON object from a Gemini response.
///
/// The model answers in free text, usually a fenced ```json block. This
/// validates the candidate/content shape, strips the fence markers, and
/// parses whatever remains.
pub fn recover_payload(response: GenerateContentResponse) -> Result<Value> {
    if let Some(error) = response.error {
        return Err(ExtractError::UpstreamApi(error.message()));
    }

    let text = response
        .candidates
        .first()
        .and_then(|candidate| candidate.content.as_ref())
        .and_then(|content| content.parts.first())
        .and_then(|part| part.as_text())
        .ok_or(ExtractError::MalformedResponse)?;

    let stripped = strip_code_fences(text);

    serde_json::from_str(&stripped).map_err(|e| ExtractError::Parse(e.to_string()))
}

/// Remove ```json / ``` fence markers and surrounding whitespace.
fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_string()
}
