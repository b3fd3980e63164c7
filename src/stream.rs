//! Fragment sequences and the pacing streaming presenter.
//!
//! A response — canned or retrieved — is revealed as a lazy, finite,
//! non-restartable sequence of text fragments. The presenter pulls
//! fragments one at a time, republishes the growing partial string, and
//! waits a fixed delay between fragments. The final text is committed to
//! the transcript only on natural exhaustion, so a consumer that stops
//! pulling early cannot corrupt the transcript.

use crate::error::StyleMateError;
use std::collections::VecDeque;
use std::time::Duration;
use tokio::sync::mpsc;

/// Fragment granularity for display pacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentGranularity {
    /// Fixed-size character chunks (char-boundary safe).
    Chars(usize),
    /// Split on `". "` sentence boundaries.
    Sentence,
}

/// Pacing configuration: fragment granularity plus inter-fragment delay.
#[derive(Debug, Clone, Copy)]
pub struct StreamConfig {
    pub granularity: FragmentGranularity,
    pub delay: Duration,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            granularity: FragmentGranularity::Chars(crate::config::DEFAULT_FRAGMENT_CHARS),
            delay: Duration::from_millis(crate::config::DEFAULT_FRAGMENT_DELAY_MS),
        }
    }
}

/// Split `text` into display fragments. Concatenating the result yields
/// exactly the input text.
pub fn split_fragments(text: &str, granularity: FragmentGranularity) -> Vec<String> {
    match granularity {
        FragmentGranularity::Chars(n) => {
            let n = n.max(1);
            let chars: Vec<char> = text.chars().collect();
            chars
                .chunks(n)
                .map(|chunk| chunk.iter().collect())
                .collect()
        }
        FragmentGranularity::Sentence => text
            .split_inclusive(". ")
            .map(str::to_string)
            .collect(),
    }
}

/// A lazy, finite, non-restartable fragment sequence.
///
/// `Ready` holds pre-split fragments (canned replies); `Live` receives
/// fragments from a boundary task as they arrive. Either way the sequence
/// is a one-shot pull source, never a replayable collection.
pub enum FragmentSource {
    Ready(VecDeque<String>),
    Live(mpsc::Receiver<Result<String, StyleMateError>>),
}

impl FragmentSource {
    /// Build a ready source by splitting `text` per `granularity`.
    pub fn from_text(text: &str, granularity: FragmentGranularity) -> Self {
        FragmentSource::Ready(split_fragments(text, granularity).into())
    }

    /// Pull the next fragment. `None` means natural exhaustion.
    pub async fn next(&mut self) -> Option<Result<String, StyleMateError>> {
        match self {
            FragmentSource::Ready(queue) => queue.pop_front().map(Ok),
            FragmentSource::Live(rx) => rx.recv().await,
        }
    }
}

/// Presenter state: streaming until the source is exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PresenterState {
    Streaming,
    Done,
}

/// Consumes a fragment source and republishes growing partial strings at a
/// fixed pacing interval.
#[derive(Debug, Clone, Copy)]
pub struct StreamingPresenter {
    config: StreamConfig,
}

impl StreamingPresenter {
    pub fn new(config: StreamConfig) -> Self {
        Self { config }
    }

    /// Drain `source` to completion. On each tick the next fragment is
    /// appended to the accumulator and the accumulated text is published
    /// via `on_partial`, followed by the configured delay.
    ///
    /// Returns the final accumulated text on natural exhaustion so the
    /// caller can commit it to the transcript exactly once. An error item
    /// terminates the stream and propagates; nothing should be committed
    /// in that case.
    pub async fn present<F>(
        &self,
        mut source: FragmentSource,
        mut on_partial: F,
    ) -> Result<String, StyleMateError>
    where
        F: FnMut(&str) + Send,
    {
        let mut state = PresenterState::Streaming;
        let mut accumulated = String::new();

        while state == PresenterState::Streaming {
            match source.next().await {
                Some(Ok(fragment)) => {
                    accumulated.push_str(&fragment);
                    on_partial(&accumulated);
                    tokio::time::sleep(self.config.delay).await;
                }
                Some(Err(e)) => {
                    tracing::warn!("fragment source terminated with error: {}", e);
                    return Err(e);
                }
                None => state = PresenterState::Done,
            }
        }

        Ok(accumulated)
    }
}
