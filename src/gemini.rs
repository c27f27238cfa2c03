//! Client for the Google Generative Language REST API. The request building
//! and response unwrapping are plain functions over serde DTOs so they can be
//! tested off the network; the one async entry point maps every failure to a
//! static fallback string (no retries, no user-facing errors).

use gloo_net::http::Request;
use log::error;
use serde::{Deserialize, Serialize};

use crate::config;

/// Shown when the model answers but produces no usable text.
pub const NO_STRATEGY_FALLBACK: &str = "I apologize, but I couldn't generate a \
    specific strategy at this moment. Please contact our team directly.";

/// Shown when the call itself fails (network, status, missing key).
pub const SERVICE_BUSY_FALLBACK: &str = "Our AI analysis systems are currently \
    high-volume. Please try again or book a consultation.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

// f64 so the serialized temperature is exactly 0.7, not an f32 widening.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationConfig {
    pub temperature: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Candidate {
    pub content: Option<Content>,
}

/// Wraps the user's free-text issue in the consultant persona prompt.
pub fn build_request(issue_description: &str) -> GenerateContentRequest {
    let prompt = format!(
        "You are a senior credit consultant at \"Florida Credit Firm\", a \
         high-end credit repair agency.\n\n\
         User Issue: \"{issue_description}\"\n\n\
         Provide a strategic, professional response in 3 paragraphs:\n\
         1. Identify the likely violation or issue based on FCRA/FDCPA laws.\n\
         2. Suggest a specific dispute strategy (e.g., Factual Dispute, \
         Validation Debt Letter).\n\
         3. Explain how our firm would handle this to remove the item.\n\n\
         Tone: Authoritative, empathetic, professional, and confident.\n\
         Format: specific and actionable. Do not give generic advice."
    );
    GenerateContentRequest {
        contents: vec![Content {
            parts: vec![Part { text: Some(prompt) }],
        }],
        generation_config: GenerationConfig { temperature: 0.7 },
    }
}

/// Concatenated text of the first candidate, or `None` when the response
/// carries no non-empty text.
pub fn extract_text(response: &GenerateContentResponse) -> Option<String> {
    let content = response.candidates.first()?.content.as_ref()?;
    let text: String = content
        .parts
        .iter()
        .filter_map(|part| part.text.as_deref())
        .collect();
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Sends the user's issue to the model and returns the strategy text, falling
/// back to static copy on any failure.
pub async fn analyze_credit_issue(issue_description: &str) -> String {
    let api_key = config::get_gemini_api_key();
    if api_key.is_empty() {
        return SERVICE_BUSY_FALLBACK.to_string();
    }

    let url = format!(
        "{}/models/{}:generateContent?key={}",
        config::GEMINI_API_BASE,
        config::GEMINI_MODEL,
        api_key
    );
    let body = build_request(issue_description);

    let request = match Request::post(&url).json(&body) {
        Ok(request) => request,
        Err(err) => {
            error!("Failed to build Gemini request: {:?}", err);
            return SERVICE_BUSY_FALLBACK.to_string();
        }
    };

    match request.send().await {
        Ok(response) => {
            if !response.ok() {
                error!("Gemini API returned status {}", response.status());
                return SERVICE_BUSY_FALLBACK.to_string();
            }
            match response.json::<GenerateContentResponse>().await {
                Ok(parsed) => extract_text(&parsed)
                    .unwrap_or_else(|| NO_STRATEGY_FALLBACK.to_string()),
                Err(err) => {
                    error!("Failed to parse Gemini response: {:?}", err);
                    SERVICE_BUSY_FALLBACK.to_string()
                }
            }
        }
        Err(err) => {
            error!("Gemini API call failed: {:?}", err);
            SERVICE_BUSY_FALLBACK.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_embeds_the_issue_and_temperature() {
        let request = build_request("Late payment on Capital One from 2021");
        assert_eq!(request.generation_config.temperature, 0.7);
        let text = request.contents[0].parts[0].text.as_deref().unwrap();
        assert!(text.contains("Late payment on Capital One from 2021"));
        assert!(text.contains("FCRA/FDCPA"));
    }

    #[test]
    fn request_serializes_with_camel_case_config() {
        let value = serde_json::to_value(build_request("medical collection")).unwrap();
        assert!(value.get("generationConfig").is_some());
        assert_eq!(value["generationConfig"]["temperature"], json!(0.7));
        assert!(value["contents"][0]["parts"][0]["text"].is_string());
    }

    #[test]
    fn extract_text_joins_the_first_candidate_parts() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [
                { "content": { "parts": [
                    { "text": "First paragraph." },
                    { "text": " Second paragraph." }
                ] } },
                { "content": { "parts": [{ "text": "ignored" }] } }
            ]
        }))
        .unwrap();
        assert_eq!(
            extract_text(&response).as_deref(),
            Some("First paragraph. Second paragraph.")
        );
    }

    #[test]
    fn extract_text_is_none_without_candidates() {
        assert_eq!(extract_text(&GenerateContentResponse::default()), None);
    }

    #[test]
    fn extract_text_is_none_for_blank_or_missing_parts() {
        let blank: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{ "content": { "parts": [{ "text": "  \n" }] } }]
        }))
        .unwrap();
        assert_eq!(extract_text(&blank), None);

        let missing: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{ "content": { "parts": [{}] } }]
        }))
        .unwrap();
        assert_eq!(extract_text(&missing), None);
    }

    #[test]
    fn response_tolerates_extra_fields() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": { "parts": [{ "text": "ok" }], "role": "model" },
                "finishReason": "STOP"
            }],
            "usageMetadata": { "totalTokenCount": 42 }
        }))
        .unwrap();
        assert_eq!(extract_text(&response).as_deref(), Some("ok"));
    }
}
