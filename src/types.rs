//! Shared types and data structures for the StyleMate conversation core.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::SystemTime;

/// Spoken/written language of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    German,
    English,
}

/// Sentiment derived from the negative-phrase set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    Negative,
    Neutral,
}

/// Coarse topic derived from keyword containment.
///
/// `PurchaseIntent` means purchase AND outfit keywords were both present;
/// a purchase keyword alone carries no topic (the message falls through to
/// retrieval). `WardrobeCheck` is never produced by classification — the
/// router assigns it when a gender sub-dialog resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Topic {
    OutfitRequest,
    PurchaseIntent,
    WardrobeCheck,
    None,
}

/// Per-message classification result. Derived, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub language: Language,
    pub sentiment: Sentiment,
    pub topic: Topic,
}

/// Role of a transcript turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    User,
    Assistant,
}

/// Content of a transcript turn: plain text or an attachment reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TurnContent {
    Text(String),
    Attachment(PathBuf),
}

impl TurnContent {
    /// Serialize this content for the retrieval context window.
    ///
    /// Attachment turns serialize as their reference path string.
    pub fn as_context_line(&self) -> String {
        match self {
            TurnContent::Text(text) => text.clone(),
            TurnContent::Attachment(path) => path.display().to_string(),
        }
    }
}

/// One message exchanged in a conversation. Immutable once appended;
/// insertion order is conversation order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: TurnContent,
    pub timestamp: SystemTime,
}

/// Recognized target gender in the clarification sub-dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Female,
    Male,
    Diverse,
}

impl Gender {
    /// Recognize a gender answer by case-insensitive substring containment
    /// over the fixed German/English answer vocabulary.
    pub fn recognize(text: &str) -> Option<Gender> {
        let lower = text.to_lowercase();
        // "woman"/"female" contain "man"/"male"; check female first.
        if ["frau", "weiblich", "woman", "female"]
            .iter()
            .any(|w| lower.contains(w))
        {
            return Some(Gender::Female);
        }
        if ["divers", "non-binary", "nicht-binär"]
            .iter()
            .any(|w| lower.contains(w))
        {
            return Some(Gender::Diverse);
        }
        if ["mann", "männlich", "man", "male"]
            .iter()
            .any(|w| lower.contains(w))
        {
            return Some(Gender::Male);
        }
        None
    }
}

/// Per-session sub-dialog state that must survive exactly one round trip.
#[derive(Debug, Clone, PartialEq)]
pub enum PendingIntent {
    /// A gender clarification question is outstanding; `original_query`
    /// is the outfit request that triggered it.
    GenderClarification { original_query: String },
}

/// Handling path selected by the intent router for one message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutePath {
    CannedNegative,
    CannedPurchase,
    GenderClarification,
    WardrobeCheck,
    Retrieval,
}

/// One user submission: optional text plus zero or more image attachments.
#[derive(Debug, Clone, Default)]
pub struct Submission {
    pub text: String,
    pub attachments: Vec<PathBuf>,
}

impl Submission {
    /// Plain-text submission without attachments.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            attachments: Vec::new(),
        }
    }
}

/// Request-scoped accumulator of vision description strings.
///
/// Created per submission, folded into the outgoing message text, and
/// dropped when the response cycle completes — never a process-wide list.
#[derive(Debug, Clone, Default)]
pub struct ImageNotes {
    notes: Vec<String>,
}

impl ImageNotes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, description: String) {
        self.notes.push(description);
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Append the collected descriptions to `text`, prefixed with an
    /// explanatory line. Returns `text` unchanged when no notes exist.
    pub fn fold_into(&self, text: &str) -> String {
        if self.notes.is_empty() {
            return text.to_string();
        }
        let mut out = text.to_string();
        out.push_str("\nTake the following descriptions into account when answering:\n");
        for note in &self.notes {
            out.push_str(note);
            out.push('\n');
        }
        out
    }
}
