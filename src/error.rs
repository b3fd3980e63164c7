//! Custom error types for the StyleMate conversation core.

use thiserror::Error;

/// Unified error type propagated through every pipeline step.
#[derive(Debug, Error)]
pub enum StyleMateError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Input validation error: {0}")]
    InputValidation(String),

    #[error("Retrieval error: {0}")]
    Retrieval(String),

    #[error("Vision error: {0}")]
    Vision(String),

    #[error("Reply table error: {0}")]
    ReplyTable(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Maximum number of characters from an HTTP error body included in error
/// messages. Prevents large or potentially sensitive server responses from
/// propagating verbatim through error chains and log sinks.
const MAX_ERROR_BODY_LEN: usize = 200;

/// Truncate a raw HTTP error body for safe inclusion in error messages.
///
/// Char-based truncation so a multi-byte UTF-8 boundary cannot panic.
pub(crate) fn truncate_error_body(body: &str) -> String {
    if body.chars().count() > MAX_ERROR_BODY_LEN {
        let truncated: String = body.chars().take(MAX_ERROR_BODY_LEN).collect();
        format!("{truncated}…[truncated]")
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_body_passes_through() {
        assert_eq!(truncate_error_body("oops"), "oops");
    }

    #[test]
    fn long_body_is_truncated() {
        let body = "x".repeat(500);
        let out = truncate_error_body(&body);
        assert!(out.ends_with("…[truncated]"));
        assert!(out.chars().count() < 300);
    }

    #[test]
    fn multibyte_body_truncates_on_char_boundary() {
        let body = "ä".repeat(500);
        let out = truncate_error_body(&body);
        assert!(out.ends_with("…[truncated]"));
    }
}
