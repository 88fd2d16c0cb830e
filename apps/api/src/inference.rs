//! Inference client: the single point of entry for all Gemini API calls.
//!
//! No other module may call the Gemini API directly. Handlers reach the
//! model through the `InferenceClient` trait held in `AppState`, so tests
//! can substitute a canned implementation.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("model returned no text content")]
    EmptyReply,
}

/// Sends one prompt to a generative model and returns its free-text reply.
///
/// One attempt per call. A failed call surfaces as an `InferenceError`;
/// callers decide how to report it.
#[async_trait]
pub trait InferenceClient: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, InferenceError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Wire types (generateContent REST API)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct GeminiRequest<'a> {
    contents: Vec<GeminiContent<'a>>,
}

#[derive(Debug, Serialize)]
struct GeminiContent<'a> {
    parts: Vec<GeminiPart<'a>>,
}

#[derive(Debug, Serialize)]
struct GeminiPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiReplyContent>,
}

#[derive(Debug, Deserialize)]
struct GeminiReplyContent {
    #[serde(default)]
    parts: Vec<GeminiReplyPart>,
}

#[derive(Debug, Deserialize)]
struct GeminiReplyPart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    prompt_token_count: Option<u32>,
    candidates_token_count: Option<u32>,
}

impl GeminiResponse {
    /// Concatenates the text parts of the first candidate, if any.
    /// A candidate without text (e.g. blocked content) yields `None`.
    fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let text: String = parts.iter().filter_map(|p| p.text.as_deref()).collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[derive(Debug, Deserialize)]
struct GeminiApiError {
    error: GeminiApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiApiErrorBody {
    message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Production client
// ────────────────────────────────────────────────────────────────────────────

/// Client for the Gemini `generateContent` REST API.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
            model,
        }
    }
}

#[async_trait]
impl InferenceClient for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, InferenceError> {
        let request_body = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart { text: prompt }],
            }],
        };

        let url = format!("{GEMINI_API_BASE}/{}:generateContent", self.model);
        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Pull the human-readable message out of the error envelope
            let message = serde_json::from_str::<GeminiApiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(InferenceError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let reply: GeminiResponse = response.json().await?;

        if let Some(usage) = &reply.usage_metadata {
            debug!(
                "Model call succeeded: prompt_tokens={}, reply_tokens={}",
                usage.prompt_token_count.unwrap_or(0),
                usage.candidates_token_count.unwrap_or(0)
            );
        }

        reply.text().ok_or(InferenceError::EmptyReply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_wire_format() {
        let request = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: "screen this resume",
                }],
            }],
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "contents": [{ "parts": [{ "text": "screen this resume" }] }] })
        );
    }

    #[test]
    fn test_response_text_concatenates_first_candidate_parts() {
        let raw = r#"{
            "candidates": [{
                "content": {
                    "parts": [{"text": "{\"score\""}, {"text": ": 90}"}],
                    "role": "model"
                },
                "finishReason": "STOP"
            }],
            "usageMetadata": {"promptTokenCount": 512, "candidatesTokenCount": 64, "totalTokenCount": 576},
            "modelVersion": "gemini-2.0-flash"
        }"#;

        let response: GeminiResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.text().as_deref(), Some("{\"score\": 90}"));

        let usage = response.usage_metadata.unwrap();
        assert_eq!(usage.prompt_token_count, Some(512));
        assert_eq!(usage.candidates_token_count, Some(64));
    }

    #[test]
    fn test_response_without_candidates_has_no_text() {
        let response: GeminiResponse = serde_json::from_str(r#"{"candidates": []}"#).unwrap();
        assert!(response.text().is_none());

        let response: GeminiResponse = serde_json::from_str("{}").unwrap();
        assert!(response.text().is_none());
    }

    #[test]
    fn test_blocked_candidate_has_no_text() {
        let raw = r#"{"candidates": [{"finishReason": "SAFETY"}]}"#;
        let response: GeminiResponse = serde_json::from_str(raw).unwrap();
        assert!(response.text().is_none());
    }

    #[test]
    fn test_error_envelope_parse() {
        let raw = r#"{"error": {"code": 400, "message": "API key not valid.", "status": "INVALID_ARGUMENT"}}"#;
        let parsed: GeminiApiError = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.error.message, "API key not valid.");
    }
}
