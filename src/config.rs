//! Configuration loading from environment variables via dotenvy.
//! No values are ever hardcoded here.

use crate::error::StyleMateError;
use crate::stream::{FragmentGranularity, StreamConfig};
use std::time::Duration;

/// Runtime configuration loaded from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// OpenAI API key for the vision delegate — sourced from `OPENAI_API_KEY`
    pub openai_api_key: String,
    /// Base URL for the OpenAI-compatible API — sourced from `OPENAI_BASE_URL`
    pub openai_base_url: String,
    /// Vision-capable chat model identifier — sourced from `VISION_MODEL`
    pub vision_model: String,
    /// Base URL of the retrieval service — sourced from `STYLEMATE_RETRIEVAL_URL`
    pub retrieval_base_url: String,
    /// Fragment granularity for response pacing — sourced from
    /// `STYLEMATE_GRANULARITY` (`chars` | `sentence`)
    pub fragment_granularity: FragmentGranularity,
    /// Inter-fragment delay — sourced from `STYLEMATE_FRAGMENT_DELAY_MS`
    pub fragment_delay: Duration,
}

impl Config {
    /// Pacing configuration for the streaming presenter.
    pub fn stream_config(&self) -> StreamConfig {
        StreamConfig {
            granularity: self.fragment_granularity,
            delay: self.fragment_delay,
        }
    }
}

/// Load configuration purely from already-set environment variables.
///
/// Does **not** call `dotenvy::dotenv()` — useful in tests that need to
/// control the env precisely via [`std::env::set_var`] / [`std::env::remove_var`].
///
/// # Errors
/// Returns [`StyleMateError::Config`] if required variables are missing or invalid.
pub fn load_config_from_env() -> Result<Config, StyleMateError> {
    let api_key = std::env::var("OPENAI_API_KEY")
        .map_err(|_| StyleMateError::Config("OPENAI_API_KEY not set".to_string()))?;

    if api_key.is_empty() {
        return Err(StyleMateError::Config(
            "OPENAI_API_KEY is empty".to_string(),
        ));
    }

    let openai_base_url = std::env::var("OPENAI_BASE_URL")
        .unwrap_or_else(|_| "https://api.openai.com".to_string());

    let retrieval_base_url = std::env::var("STYLEMATE_RETRIEVAL_URL")
        .unwrap_or_else(|_| "http://localhost:8080".to_string());

    for url in [&openai_base_url, &retrieval_base_url] {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(StyleMateError::Config(format!(
                "endpoint URL must start with http:// or https://, got: {url}"
            )));
        }
    }

    // SECURITY: warn when a plaintext HTTP endpoint carries the API key.
    // Only acceptable on localhost for local-proxy development setups.
    if openai_base_url.starts_with("http://") {
        eprintln!(
            "WARNING: OPENAI_BASE_URL uses plaintext http://. \
             The API key will be transmitted without TLS encryption."
        );
    }

    let vision_model =
        std::env::var("VISION_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string());

    let fragment_granularity = match std::env::var("STYLEMATE_GRANULARITY").as_deref() {
        Ok("sentence") => FragmentGranularity::Sentence,
        _ => {
            let chars = std::env::var("STYLEMATE_FRAGMENT_CHARS")
                .ok()
                .and_then(|v| v.parse::<usize>().ok())
                .filter(|&n| n > 0)
                .unwrap_or(DEFAULT_FRAGMENT_CHARS);
            FragmentGranularity::Chars(chars)
        }
    };

    let fragment_delay = std::env::var("STYLEMATE_FRAGMENT_DELAY_MS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .map(Duration::from_millis)
        .unwrap_or(Duration::from_millis(DEFAULT_FRAGMENT_DELAY_MS));

    Ok(Config {
        openai_api_key: api_key,
        openai_base_url,
        vision_model,
        retrieval_base_url,
        fragment_granularity,
        fragment_delay,
    })
}

/// Load configuration from the environment (`.env` + system env vars).
///
/// Loads `.env` via `dotenvy` first (ignoring errors if the file is absent),
/// then delegates to [`load_config_from_env`].
///
/// # Errors
/// Returns [`StyleMateError::Config`] if required variables are missing or invalid.
pub fn load_config() -> Result<Config, StyleMateError> {
    // Load .env if present; ignore the error — variables may already be set externally.
    let _ = dotenvy::dotenv();
    load_config_from_env()
}

// ── Pipeline constants ─────────────────────────────────────────────────────

/// Number of most-recent transcript turns joined into the retrieval context.
pub const CONTEXT_WINDOW_TURNS: usize = 5;

/// Maximum response length (tokens) requested from the vision endpoint.
pub const VISION_MAX_TOKENS: u32 = 150;

/// Maximum allowed length (characters) for user input.
pub const MAX_INPUT_LENGTH: usize = 32_768;

/// Maximum number of turns kept in the in-memory transcript buffer.
pub const MAX_TRANSCRIPT_TURNS: usize = 50;

/// Default fragment size (characters) for the typewriter stream.
pub const DEFAULT_FRAGMENT_CHARS: usize = 3;

/// Default inter-fragment delay in milliseconds.
pub const DEFAULT_FRAGMENT_DELAY_MS: u64 = 100;
