//! Per-session transcript and sub-dialog state.
//!
//! Every conversation owns an independent [`Session`]; no state is shared
//! across sessions. The transcript is append-only during a session: user
//! turns are appended on receipt, assistant turns only after their fragment
//! sequence is exhausted, so partial text is never recorded as final.

use crate::config::{CONTEXT_WINDOW_TURNS, MAX_TRANSCRIPT_TURNS};
use crate::types::{PendingIntent, Role, Turn, TurnContent};
use std::path::PathBuf;
use std::time::SystemTime;
use uuid::Uuid;

/// Display prefix some variants prepend to assistant messages. The
/// transcript stores assistant text with this prefix stripped, so the
/// committed text always equals the substantive reply content.
const PERSONA_PREFIX: &str = "**StyleMate:**";

/// Strip a leading persona prefix (and surrounding whitespace) from
/// assistant text before it is committed to the transcript.
pub fn strip_persona_prefix(text: &str) -> &str {
    match text.trim_start().strip_prefix(PERSONA_PREFIX) {
        Some(rest) => rest.trim_start(),
        None => text,
    }
}

/// One conversation session: ordered transcript plus pending-intent state.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: String,
    transcript: Vec<Turn>,
    /// Total turns ever appended, including ones trimmed from the buffer.
    pub turn_count: usize,
    pending: Option<PendingIntent>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates a new empty session with a fresh id.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            transcript: Vec::new(),
            turn_count: 0,
            pending: None,
        }
    }

    /// Appends a user text turn.
    pub fn push_user_text(&mut self, text: impl Into<String>) {
        self.push(Role::User, TurnContent::Text(text.into()));
    }

    /// Appends a user attachment turn (recorded as its reference path).
    pub fn push_attachment(&mut self, path: PathBuf) {
        self.push(Role::User, TurnContent::Attachment(path));
    }

    /// Commits a completed assistant reply, stripping any persona prefix.
    ///
    /// Must only be called after the fragment sequence is exhausted.
    pub fn push_assistant(&mut self, text: &str) {
        let committed = strip_persona_prefix(text).to_string();
        self.push(Role::Assistant, TurnContent::Text(committed));
    }

    fn push(&mut self, role: Role, content: TurnContent) {
        self.turn_count += 1;
        self.transcript.push(Turn {
            role,
            content,
            timestamp: SystemTime::now(),
        });
        // Prevent unbounded memory growth. The retrieval window only ever
        // reads the tail, so dropping from the front is safe.
        if self.transcript.len() > MAX_TRANSCRIPT_TURNS {
            self.transcript.remove(0);
        }
    }

    /// Read-only view of the transcript in conversation order.
    pub fn transcript(&self) -> &[Turn] {
        &self.transcript
    }

    /// Retrieval context: the most recent [`CONTEXT_WINDOW_TURNS`] turns'
    /// content joined with newline separators, in transcript order.
    pub fn context_window(&self) -> String {
        let start = self.transcript.len().saturating_sub(CONTEXT_WINDOW_TURNS);
        self.transcript[start..]
            .iter()
            .map(|t| t.content.as_context_line())
            .collect::<Vec<_>>()
            .join("\n")
    }

    // ── Pending-intent state ───────────────────────────────────────────

    pub fn pending(&self) -> Option<&PendingIntent> {
        self.pending.as_ref()
    }

    pub fn set_pending(&mut self, pending: PendingIntent) {
        self.pending = Some(pending);
    }

    pub fn clear_pending(&mut self) {
        self.pending = None;
    }
}
