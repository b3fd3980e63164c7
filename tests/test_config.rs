//! Tests for [`stylemate::config`]
//!
//! All env-dependent assertions live in a single test function: integration
//! tests in one binary share the process environment, and parallel env
//! mutation would race.

use std::time::Duration;
use stylemate::config::{load_config_from_env, CONTEXT_WINDOW_TURNS, VISION_MAX_TOKENS};
use stylemate::error::StyleMateError;
use stylemate::stream::FragmentGranularity;

struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    fn set(key: &'static str, value: &str) -> Self {
        let original = std::env::var(key).ok();
        std::env::set_var(key, value);
        Self { key, original }
    }

    fn remove(key: &'static str) -> Self {
        let original = std::env::var(key).ok();
        std::env::remove_var(key);
        Self { key, original }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.original {
            Some(v) => std::env::set_var(self.key, v),
            None => std::env::remove_var(self.key),
        }
    }
}

#[test]
fn test_config_loading_from_env() {
    // Missing API key is a configuration error.
    {
        let _guard = EnvGuard::remove("OPENAI_API_KEY");
        let err = load_config_from_env().unwrap_err();
        assert!(matches!(err, StyleMateError::Config(_)));
    }

    // Minimal valid environment picks up documented defaults.
    {
        let _key = EnvGuard::set("OPENAI_API_KEY", "sk-test");
        let _url = EnvGuard::remove("OPENAI_BASE_URL");
        let _retrieval = EnvGuard::remove("STYLEMATE_RETRIEVAL_URL");
        let _granularity = EnvGuard::remove("STYLEMATE_GRANULARITY");
        let _chars = EnvGuard::remove("STYLEMATE_FRAGMENT_CHARS");
        let _delay = EnvGuard::remove("STYLEMATE_FRAGMENT_DELAY_MS");

        let config = load_config_from_env().unwrap();
        assert_eq!(config.openai_base_url, "https://api.openai.com");
        assert_eq!(config.vision_model, "gpt-4o-mini");
        assert_eq!(config.fragment_granularity, FragmentGranularity::Chars(3));
        assert_eq!(config.fragment_delay, Duration::from_millis(100));
    }

    // Pacing overrides are honored.
    {
        let _key = EnvGuard::set("OPENAI_API_KEY", "sk-test");
        let _granularity = EnvGuard::set("STYLEMATE_GRANULARITY", "sentence");
        let _delay = EnvGuard::set("STYLEMATE_FRAGMENT_DELAY_MS", "1000");

        let config = load_config_from_env().unwrap();
        assert_eq!(config.fragment_granularity, FragmentGranularity::Sentence);
        assert_eq!(config.fragment_delay, Duration::from_millis(1000));
    }

    // A non-http endpoint URL is rejected.
    {
        let _key = EnvGuard::set("OPENAI_API_KEY", "sk-test");
        let _url = EnvGuard::set("STYLEMATE_RETRIEVAL_URL", "ftp://nope");
        let err = load_config_from_env().unwrap_err();
        assert!(matches!(err, StyleMateError::Config(_)));
    }
}

#[test]
fn test_pipeline_constants() {
    assert_eq!(CONTEXT_WINDOW_TURNS, 5);
    assert_eq!(VISION_MAX_TOKENS, 150);
}
