//! Image description boundary: a single-shot vision-capable chat call.

use crate::config::{Config, VISION_MAX_TOKENS};
use crate::error::{truncate_error_body, StyleMateError};
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde_json::json;

/// Fixed instructional prompt sent with every image.
const VISION_PROMPT: &str = "What is in this image?";

/// Boundary to a hosted vision-capable model: bytes in, short description out.
#[async_trait]
pub trait ImageDescriber: Send + Sync {
    async fn describe(&self, bytes: &[u8]) -> Result<String, StyleMateError>;
}

/// Vision client for an OpenAI-compatible `/v1/chat/completions` endpoint.
pub struct OpenAiVision {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiVision {
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: config.openai_api_key.clone(),
            base_url: config.openai_base_url.clone(),
            model: config.vision_model.clone(),
        }
    }

    /// Parse the completion JSON into the description text.
    fn parse_response(json: serde_json::Value) -> Result<String, StyleMateError> {
        json.pointer("/choices/0/message/content")
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .ok_or_else(|| {
                StyleMateError::Vision("completion response missing message content".to_string())
            })
    }
}

#[async_trait]
impl ImageDescriber for OpenAiVision {
    async fn describe(&self, bytes: &[u8]) -> Result<String, StyleMateError> {
        let data_url = format!("data:image/jpeg;base64,{}", BASE64.encode(bytes));

        let body = json!({
            "model": self.model,
            "max_tokens": VISION_MAX_TOKENS,
            "messages": [{
                "role": "user",
                "content": [
                    { "type": "text", "text": VISION_PROMPT },
                    { "type": "image_url", "image_url": { "url": data_url } }
                ]
            }]
        });

        let url = format!("{}/v1/chat/completions", self.base_url);
        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let error_body = resp
                .text()
                .await
                .unwrap_or_else(|_| "(unreadable body)".to_string());
            return Err(map_http_error(status.as_u16(), &error_body));
        }

        let raw = resp.json::<serde_json::Value>().await?;
        Self::parse_response(raw)
    }
}

/// Map an HTTP error status to a [`StyleMateError::Vision`].
fn map_http_error(status: u16, body: &str) -> StyleMateError {
    let safe_body = truncate_error_body(body);
    match status {
        401 => StyleMateError::Vision("Unauthorized: check OPENAI_API_KEY".to_string()),
        429 => StyleMateError::Vision("Rate limited by vision endpoint".to_string()),
        s if s >= 500 => StyleMateError::Vision(format!("vision server error {s}: {safe_body}")),
        s => StyleMateError::Vision(format!("HTTP {s}: {safe_body}")),
    }
}
