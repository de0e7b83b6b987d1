//! Gemini API client
//!
//! Issues one non-streaming `generateContent` request per generation.
//! The credential comes from the environment; without it the client is
//! never constructed and no network attempt is made.

use thiserror::Error;

use crate::config::GenerationConfig;

/// Base URL for the Gemini generative-language API
const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Environment variable holding the API credential
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Errors that can occur while generating a plan
#[derive(Debug, Error)]
pub enum GenError {
    /// No API credential is present
    #[error("API key not configured: {0}")]
    NotConfigured(String),

    /// Transport-level failure during the API request
    #[error("Network error: {0}")]
    Network(String),

    /// The API returned an error response
    #[error("API error ({code}): {message}")]
    Api { code: u16, message: String },

    /// Failed to parse the API response
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Gemini API client for a single model
#[derive(Debug)]
pub struct GeminiClient {
    api_key: String,
    model: String,
    http: reqwest::blocking::Client,
}

impl GeminiClient {
    /// Create a client from config, reading the credential from the environment
    ///
    /// Fails with [`GenError::NotConfigured`] when the environment variable is
    /// missing or empty.
    pub fn from_config(config: &GenerationConfig) -> Result<Self, GenError> {
        let api_key = std::env::var(API_KEY_ENV).ok();
        Self::from_parts(api_key, config.model.clone())
    }

    fn from_parts(api_key: Option<String>, model: String) -> Result<Self, GenError> {
        let api_key = api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                GenError::NotConfigured(format!("set the {API_KEY_ENV} environment variable"))
            })?;

        Ok(Self {
            api_key,
            model,
            http: reqwest::blocking::Client::new(),
        })
    }

    #[cfg(test)]
    pub(crate) fn api_key(&self) -> &str {
        &self.api_key
    }

    #[cfg(test)]
    pub(crate) fn model(&self) -> &str {
        &self.model
    }

    /// Endpoint URL for the configured model
    ///
    /// Gemini authenticates via a `key` query parameter, not a header.
    pub(crate) fn build_url(&self) -> String {
        format!(
            "{GEMINI_API_BASE}/{}:generateContent?key={}",
            self.model, self.api_key
        )
    }

    /// Serialize the request body for a prompt
    pub(crate) fn build_request_body(&self, prompt: &str) -> Result<String, GenError> {
        let body = serde_json::json!({
            "contents": [
                {
                    "role": "user",
                    "parts": [
                        {
                            "text": prompt
                        }
                    ]
                }
            ]
        });

        serde_json::to_string(&body).map_err(|e| GenError::Parse(e.to_string()))
    }

    /// Generate a plan: single request, single response, or single error
    ///
    /// No retry, no timeout policy, no streaming.
    pub fn generate(&self, prompt: &str) -> Result<String, GenError> {
        let body = self.build_request_body(prompt)?;

        let response = self
            .http
            .post(self.build_url())
            .header("content-type", "application/json")
            .body(body)
            .send()
            .map_err(|e| GenError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .map_err(|e| GenError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(GenError::Api {
                code: status.as_u16(),
                message: extract_api_error(&text),
            });
        }

        extract_text(&text)
    }
}

/// Pull the server's error message out of an error body, falling back to the
/// raw body when it isn't the documented `{"error": {"message": ...}}` shape.
fn extract_api_error(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| {
            json.get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.trim().to_string())
}

/// Extract and join all text parts of the first candidate
fn extract_text(body: &str) -> Result<String, GenError> {
    let json: serde_json::Value =
        serde_json::from_str(body).map_err(|e| GenError::Parse(e.to_string()))?;

    let parts = json
        .get("candidates")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("content"))
        .and_then(|c| c.get("parts"))
        .and_then(|p| p.as_array())
        .ok_or_else(|| GenError::Parse("response has no candidates".to_string()))?;

    let text: String = parts
        .iter()
        .filter_map(|part| part.get("text").and_then(|t| t.as_str()))
        .collect();

    if text.is_empty() {
        return Err(GenError::Parse(
            "response candidate has no text parts".to_string(),
        ));
    }

    Ok(text)
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
