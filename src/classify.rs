//! Keyword-based sentiment and topic classification.
//!
//! Matching is plain case-insensitive substring containment over fixed
//! phrase lists — no tokenization, stemming, or word-boundary checks, so a
//! phrase can match inside an unrelated word. That is a documented
//! limitation of the matching rule, not something to silently fix.

use crate::language::detect_language;
use crate::types::{Classification, Sentiment, Topic};

/// Negative-sentiment phrases. German and English coexist in one set and
/// are matched regardless of the detected language.
const NEGATIVE_PHRASES: &[&str] = &[
    "hässlich",
    "ugly",
    "schlecht",
    "nicht gut",
    "nicht schön",
    "grässlich",
    "furchtbar",
    "katastrophe",
];

/// Outfit-request keywords.
const OUTFIT_KEYWORDS: &[&str] = &["outfit", "anziehen", "styling", "look", "wear"];

/// Purchase-intent keywords.
const PURCHASE_KEYWORDS: &[&str] = &["kaufen", "buy", "shop", "bestellen", "purchase"];

fn contains_any(lower: &str, phrases: &[&str]) -> bool {
    phrases.iter().any(|p| lower.contains(p))
}

/// Classify one incoming message: language, sentiment, and topic.
///
/// Topic rules: purchase AND outfit keywords → [`Topic::PurchaseIntent`];
/// outfit keywords alone → [`Topic::OutfitRequest`]; anything else
/// (including purchase keywords alone) carries no topic.
pub fn classify(text: &str) -> Classification {
    let language = detect_language(text);
    let lower = text.to_lowercase();

    let sentiment = if contains_any(&lower, NEGATIVE_PHRASES) {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    };

    let has_outfit = contains_any(&lower, OUTFIT_KEYWORDS);
    let has_purchase = contains_any(&lower, PURCHASE_KEYWORDS);

    let topic = match (has_purchase, has_outfit) {
        (true, true) => Topic::PurchaseIntent,
        (false, true) => Topic::OutfitRequest,
        _ => Topic::None,
    };

    Classification {
        language,
        sentiment,
        topic,
    }
}
