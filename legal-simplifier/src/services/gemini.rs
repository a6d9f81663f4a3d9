//! Gemini backend client.
//!
//! Sends one non-streaming `generateContent` request per call. The HTTP client
//! is built on first use and the API key is read from the environment on every
//! call, so a missing key is reported as a request error instead of preventing
//! startup.

use crate::config::GeminiSettings;
use crate::error::SimplifyError;
use async_trait::async_trait;
use once_cell::sync::OnceCell;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

/// Backend that turns a prompt into raw response text.
#[async_trait]
pub trait TextBackend: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, SimplifyError>;
}

pub struct GeminiClient {
    settings: GeminiSettings,
    client: OnceCell<Client>,
}

impl GeminiClient {
    pub fn new(settings: GeminiSettings) -> Self {
        Self {
            settings,
            client: OnceCell::new(),
        }
    }

    fn api_key(&self) -> Result<String, SimplifyError> {
        std::env::var(&self.settings.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| SimplifyError::missing_api_key(&self.settings.api_key_env))
    }

    fn ensure_endpoint(&self) -> Result<(), SimplifyError> {
        if self.settings.base_url.trim().is_empty() || self.settings.model.trim().is_empty() {
            return Err(SimplifyError::NotConfigured(
                "Backend endpoint is not configured. Please set APP_GEMINI__BASE_URL and APP_GEMINI__MODEL."
                    .to_string(),
            ));
        }
        Ok(())
    }

    /// No timeout is set: a hanging backend blocks the submission.
    fn http_client(&self) -> Result<&Client, SimplifyError> {
        self.client
            .get_or_try_init(|| {
                tracing::debug!("Building Gemini HTTP client");
                Client::builder().build()
            })
            .map_err(SimplifyError::from)
    }

    fn api_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.settings.base_url.trim_end_matches('/'),
            self.settings.model
        )
    }
}

#[async_trait]
impl TextBackend for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, SimplifyError> {
        self.ensure_endpoint()?;
        let api_key = self.api_key()?;
        let client = self.http_client()?;

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        tracing::debug!(
            model = %self.settings.model,
            prompt_len = prompt.len(),
            "Sending request to Gemini API"
        );

        let response = client
            .post(self.api_url())
            .query(&[("key", api_key.as_str())])
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    tracing::warn!(error = %e.without_url(), "Failed to read Gemini error body");
                    String::new()
                }
            };
            tracing::warn!(status = status.as_u16(), "Gemini API returned an error status");
            return Err(SimplifyError::Transport {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        extract_text(&body)
    }
}

/// Pull the generated text out of a `generateContent` response body.
///
/// Accepts `candidates[0].content.parts[0].text`, then a top-level `text`
/// field. Any other shape is malformed.
pub fn extract_text(body: &str) -> Result<String, SimplifyError> {
    let value: Value = serde_json::from_str(body).map_err(|e| {
        tracing::warn!(error = %e, "Gemini response is not valid JSON");
        SimplifyError::MalformedResponse
    })?;

    if let Some(tokens) = value
        .pointer("/usageMetadata/totalTokenCount")
        .and_then(Value::as_i64)
    {
        tracing::debug!(total_tokens = tokens, "Gemini usage");
    }

    value
        .pointer("/candidates/0/content/parts/0/text")
        .and_then(Value::as_str)
        .or_else(|| value.get("text").and_then(Value::as_str))
        .map(str::to_string)
        .ok_or_else(|| {
            tracing::warn!("Gemini response has no recognizable text field");
            SimplifyError::MalformedResponse
        })
}

// ============================================================================
// Gemini API Request Types
// ============================================================================

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}
