//! Heuristic language detection.
//!
//! The corpus offers two strategies (external detector vs. keyword
//! heuristic); this crate uses the keyword/character heuristic so detection
//! is deterministic and dependency-free. A detection failure is not an
//! error — ambiguous or empty input falls back to German.

use crate::types::Language;

/// Unicode characters that appear (near) exclusively in German text.
const GERMAN_CHARS: &[char] = &['ä', 'ö', 'ü', 'ß', 'Ä', 'Ö', 'Ü'];

/// High-frequency German function words and particles.
const GERMAN_WORDS: &[&str] = &[
    "und", "der", "die", "das", "ich", "du", "ist", "nicht", "ein", "eine",
    "mir", "mich", "für", "mit", "was", "wie", "mein", "kann", "brauche", "gut",
];

/// High-frequency English function words.
const ENGLISH_WORDS: &[&str] = &[
    "the", "a", "an", "is", "are", "was", "were", "be", "have", "has",
    "do", "does", "will", "would", "can", "what", "how", "why", "this", "that",
    "my", "i", "you", "need", "want",
];

/// Detect the language of `text` using character and word heuristics.
///
/// Detection order:
/// 1. German-specific Unicode characters (strong signal).
/// 2. Word-frequency scoring for German vs. English.
/// 3. Default to [`Language::German`] when no signal is found.
pub fn detect_language(text: &str) -> Language {
    // Step 1 — umlauts and ß are an unambiguous signal.
    if text.chars().any(|c| GERMAN_CHARS.contains(&c)) {
        return Language::German;
    }

    // Step 2 — word-frequency scoring.
    let lower = text.to_lowercase();
    let words: Vec<&str> = lower.split_whitespace().collect();

    if words.is_empty() {
        return Language::German;
    }

    let german_score = words.iter().filter(|w| GERMAN_WORDS.contains(w)).count();
    let english_score = words.iter().filter(|w| ENGLISH_WORDS.contains(w)).count();

    if english_score > german_score {
        Language::English
    } else {
        // Ties and no-signal inputs fall back to German.
        Language::German
    }
}
