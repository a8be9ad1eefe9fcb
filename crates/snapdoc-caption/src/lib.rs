//! Caption acquisition adapter for the Gemini `generateContent` API.
//!
//! The client is constructed explicitly and passed to whoever needs
//! captioning; there is no global instance. Calls are one-shot: retry policy
//! belongs to the caller, and none is implemented here.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::future::Future;
use thiserror::Error;

const GEMINI_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent";

const CAPTION_PROMPT: &str = "Analyze this image and provide a clear, concise, professional \
     caption (max 20 words) suitable for a PDF document. Do not include phrases like 'This \
     image shows'. Just the description.";

/// Returned when the service answers with an empty caption. An empty remote
/// response is a policy case, not an error.
pub const FALLBACK_CAPTION: &str = "No caption generated.";

pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

#[derive(Debug, Error)]
pub enum CaptionError {
    #[error("Caption service credential is missing (set {API_KEY_ENV})")]
    MissingCredential,
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Caption service error (status {status}): {message}")]
    Api { status: u16, message: String },
}

pub type Result<T> = std::result::Result<T, CaptionError>;

/// Anything that can turn image bytes into a caption. The GUI worker and the
/// CLI are generic over this, so tests can substitute a canned provider.
pub trait CaptionProvider {
    fn caption(&self, data: &[u8], mime: &str) -> impl Future<Output = Result<String>> + Send;
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
}

#[derive(Serialize)]
struct InlineData<'a> {
    mime_type: &'a str,
    data: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateResponse {
    fn text(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|content| content.parts.iter().find_map(|p| p.text.as_deref()))
    }
}

#[derive(Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Gemini-backed caption client.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
        }
    }

    /// Reads the key from `GEMINI_API_KEY`. A missing variable still yields
    /// a client; every call on it fails with `MissingCredential` before any
    /// network traffic.
    pub fn from_env() -> Self {
        Self::new(std::env::var(API_KEY_ENV).unwrap_or_default())
    }

    pub fn has_credential(&self) -> bool {
        !self.api_key.is_empty()
    }

    async fn request_caption(&self, data: &[u8], mime: &str) -> Result<String> {
        if !self.has_credential() {
            return Err(CaptionError::MissingCredential);
        }

        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![
                    Part {
                        inline_data: Some(InlineData {
                            mime_type: mime,
                            data: BASE64.encode(data),
                        }),
                        text: None,
                    },
                    Part {
                        inline_data: None,
                        text: Some(CAPTION_PROMPT),
                    },
                ],
            }],
        };

        let response = self
            .client
            .post(GEMINI_API_URL)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(CaptionError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateResponse = response.json().await?;
        let caption = normalize_caption(parsed.text());
        log::debug!("caption service returned {} chars", caption.len());
        Ok(caption)
    }
}

impl CaptionProvider for GeminiClient {
    fn caption(&self, data: &[u8], mime: &str) -> impl Future<Output = Result<String>> + Send {
        self.request_caption(data, mime)
    }
}

/// Trim the service text; an absent or empty answer becomes the fallback
/// string rather than an empty caption. No other formatting is applied.
fn normalize_caption(text: Option<&str>) -> String {
    match text.map(str::trim) {
        Some(t) if !t.is_empty() => t.to_string(),
        _ => FALLBACK_CAPTION.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_credential_fails_before_any_network_call() {
        let client = GeminiClient::new(String::new());
        assert!(!client.has_credential());
        let result = client.caption(b"bytes", "image/png").await;
        assert!(matches!(result, Err(CaptionError::MissingCredential)));
    }

    #[test]
    fn parses_caption_from_response_json() {
        let json = r#"{
            "candidates": [{
                "content": {
                    "parts": [{"text": "  A red bridge at dusk.  "}],
                    "role": "model"
                }
            }]
        }"#;
        let parsed: GenerateResponse = serde_json::from_str(json).unwrap();
        assert_eq!(normalize_caption(parsed.text()), "A red bridge at dusk.");
    }

    #[test]
    fn empty_or_missing_text_becomes_fallback_not_error() {
        let parsed: GenerateResponse = serde_json::from_str(r#"{"candidates": []}"#).unwrap();
        assert_eq!(normalize_caption(parsed.text()), FALLBACK_CAPTION);
        assert_eq!(normalize_caption(Some("   ")), FALLBACK_CAPTION);
    }

    #[test]
    fn request_body_carries_inline_data_and_prompt() {
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![
                    Part {
                        inline_data: Some(InlineData {
                            mime_type: "image/png",
                            data: BASE64.encode(b"img"),
                        }),
                        text: None,
                    },
                    Part {
                        inline_data: None,
                        text: Some(CAPTION_PROMPT),
                    },
                ],
            }],
        };
        let json = serde_json::to_value(&body).unwrap();
        let parts = &json["contents"][0]["parts"];
        assert_eq!(parts[0]["inline_data"]["mime_type"], "image/png");
        assert!(parts[0].get("text").is_none());
        assert!(
            parts[1]["text"]
                .as_str()
                .unwrap()
                .contains("professional caption")
        );
    }

    #[test]
    fn api_error_body_is_surfaced() {
        let body = r#"{"error": {"code": 403, "message": "API key not valid"}}"#;
        let parsed: ApiError = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.error.message, "API key not valid");
    }
}
