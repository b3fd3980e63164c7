//! Retrieval boundary: prompt composition and the query-engine client.
//!
//! Document indexing, embedding, and the retrieval-augmented query itself
//! live behind the [`QueryEngine`] trait; this crate only composes the
//! prompt and consumes the resulting fragment sequence.

use crate::error::{truncate_error_body, StyleMateError};
use crate::stream::FragmentSource;
use async_trait::async_trait;
use serde_json::json;
use tokio::sync::mpsc;

/// Default prompt template. Persona and tone wording here is configuration,
/// not logic — the contract is the `{context_str}` / `{query_str}` slots,
/// the answer-only-from-context instruction, and language matching.
const DEFAULT_TEMPLATE: &str = "You are a friendly and casual personal styling assistant named StyleMate, \
committed to promoting sustainable fashion choices as your top priority. \
Always encourage users to reuse existing wardrobe items, mix and match creatively, \
and reduce unnecessary consumption. \
Your responses should always match the language of the user's query (German or English).\n\
---------------------\n\
Context Information:\n\
{context_str}\n\
---------------------\n\
Given only this information and without using general knowledge, please answer in \
the appropriate language (German or English) based on the query: {query_str}\n\
Ensure your response is concise and friendly. End each response with a relevant, \
engaging question to keep the dialogue going. Do not greet the user in every message!";

/// Prompt template with `{context_str}` and `{query_str}` slots.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    text: String,
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self {
            text: DEFAULT_TEMPLATE.to_string(),
        }
    }
}

impl PromptTemplate {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Fill both slots and return the composed prompt.
    pub fn render(&self, context: &str, query: &str) -> String {
        self.text
            .replace("{context_str}", context)
            .replace("{query_str}", query)
    }
}

/// Boundary to the external document-grounded query engine.
///
/// `query` returns a one-shot lazy fragment sequence whose concatenation
/// is the full answer text. Implementations must not retry on failure —
/// a transport error surfaces as a single terminal error item.
#[async_trait]
pub trait QueryEngine: Send + Sync {
    /// Whether the document index has been built and persisted.
    async fn is_index_built(&self) -> bool;

    /// Build the index from the source documents, or load the persisted
    /// one. Must be called before the first `query`.
    async fn build_or_load(&self) -> Result<(), StyleMateError>;

    /// Execute a retrieval-augmented query for the composed prompt.
    async fn query(&self, prompt: &str) -> Result<FragmentSource, StyleMateError>;
}

/// HTTP client for a retrieval service exposing the query-engine boundary.
pub struct HttpQueryEngine {
    client: reqwest::Client,
    base_url: String,
}

impl HttpQueryEngine {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl QueryEngine for HttpQueryEngine {
    async fn is_index_built(&self) -> bool {
        let url = format!("{}/index/status", self.base_url);
        match self.client.get(&url).send().await {
            Ok(resp) => resp
                .json::<serde_json::Value>()
                .await
                .ok()
                .and_then(|v| v.get("built").and_then(|b| b.as_bool()))
                .unwrap_or(false),
            Err(e) => {
                tracing::warn!("index status check failed: {}", e);
                false
            }
        }
    }

    async fn build_or_load(&self) -> Result<(), StyleMateError> {
        let url = format!("{}/index/build", self.base_url);
        let resp = self.client.post(&url).send().await?;
        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }
        let body = resp
            .text()
            .await
            .unwrap_or_else(|_| "(unreadable body)".to_string());
        Err(map_http_error(status.as_u16(), &body))
    }

    async fn query(&self, prompt: &str) -> Result<FragmentSource, StyleMateError> {
        let url = format!("{}/query", self.base_url);
        let resp = self
            .client
            .post(&url)
            .json(&json!({ "prompt": prompt, "stream": true }))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp
                .text()
                .await
                .unwrap_or_else(|_| "(unreadable body)".to_string());
            return Err(map_http_error(status.as_u16(), &body));
        }

        // Forward streamed body chunks into a bounded channel. The receiver
        // is the one-shot fragment sequence; dropping it stops the forward
        // task on the next send.
        let (tx, rx) = mpsc::channel(64);
        let mut resp = resp;
        tokio::spawn(async move {
            loop {
                match resp.chunk().await {
                    Ok(Some(bytes)) => {
                        let text = String::from_utf8_lossy(&bytes).to_string();
                        if tx.send(Ok(text)).await.is_err() {
                            break; // consumer stopped pulling
                        }
                    }
                    Ok(None) => break,
                    Err(e) => {
                        // Mid-stream failure: one terminal error item.
                        let _ = tx.send(Err(StyleMateError::Http(e))).await;
                        break;
                    }
                }
            }
        });

        Ok(FragmentSource::Live(rx))
    }
}

/// Map an HTTP error status to a [`StyleMateError::Retrieval`].
fn map_http_error(status: u16, body: &str) -> StyleMateError {
    let safe_body = truncate_error_body(body);
    match status {
        401 => StyleMateError::Retrieval("Unauthorized: check retrieval service credentials".to_string()),
        429 => StyleMateError::Retrieval("Rate limited by retrieval service".to_string()),
        s if s >= 500 => {
            StyleMateError::Retrieval(format!("retrieval server error {s}: {safe_body}"))
        }
        s => StyleMateError::Retrieval(format!("HTTP {s}: {safe_body}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_fills_both_slots() {
        let template = PromptTemplate::new("C: {context_str} Q: {query_str}");
        assert_eq!(template.render("ctx", "query"), "C: ctx Q: query");
    }

    #[test]
    fn default_template_enforces_context_only_answers() {
        let rendered = PromptTemplate::default().render("some context", "some query");
        assert!(rendered.contains("some context"));
        assert!(rendered.contains("some query"));
        assert!(rendered.contains("without using general knowledge"));
    }

    #[test]
    fn map_401() {
        let err = map_http_error(401, "");
        assert!(err.to_string().contains("Unauthorized"));
    }

    #[test]
    fn map_503_truncates_body() {
        let err = map_http_error(503, &"x".repeat(1000));
        assert!(err.to_string().contains("server error"));
        assert!(err.to_string().contains("[truncated]"));
    }
}
