//! Canned reply table: pre-authored responses selected by intent match.
//!
//! Candidates are stored prefix-free (no `**StyleMate:**` display prefix),
//! so the streamed concatenation of a canned reply equals exactly the text
//! committed to the transcript.

use crate::error::StyleMateError;
use crate::types::Language;
use rand::Rng;

/// Which canned reply family a routed path resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyKind {
    /// Response to negative outfit feedback.
    Negative,
    /// Wardrobe-first nudge when purchase intent is detected.
    Purchase,
    /// Clarifying question asked before suggesting outfits.
    GenderQuestion,
    /// Asks what the user already owns before recommending.
    WardrobeCheck,
}

const ALL_KINDS: &[ReplyKind] = &[
    ReplyKind::Negative,
    ReplyKind::Purchase,
    ReplyKind::GenderQuestion,
    ReplyKind::WardrobeCheck,
];

const ALL_LANGUAGES: &[Language] = &[Language::German, Language::English];

const NEGATIVE_DE: &[&str] = &[
    "Es tut mir leid, dass du dich gerade so fühlst. Lass uns zusammen schauen, \
     wie wir dein Outfit aufwerten können – vielleicht mit Accessoires oder einem \
     neuen Styling-Twist! 😊\nMode ist, wie du dich darin fühlst – nicht nur das \
     Kleidungsstück selbst. Ich bin sicher, wir finden etwas, das dich zum \
     Strahlen bringt! 💖\nManchmal machen kleine Details einen großen Unterschied. \
     Vielleicht können wir dein Outfit mit einem Gürtel, einer Jacke oder Schmuck \
     aufpeppen? Soll ich dir helfen? 🌟",
];

const NEGATIVE_EN: &[&str] = &[
    "I'm sorry you're feeling this way. Let's see how we can improve your outfit \
     – maybe with accessories or a fresh styling twist! 😊\nFashion is about how \
     you feel in it – not just the clothing itself. I'm sure we can find \
     something that makes you shine! 💖\nSmall details can make a big difference. \
     Maybe we can enhance your outfit with a belt, a jacket, or some jewelry? \
     Shall I help you? 🌟",
];

const PURCHASE_DE: &[&str] = &[
    "Bevor wir etwas Neues kaufen: Lass uns zuerst in deinen Kleiderschrank \
     schauen! Oft steckt dort schon ein tolles Outfit, das nur neu kombiniert \
     werden will. Was hängt denn gerade bei dir im Schrank? 🌿",
    "Neu kaufen ist nicht immer die Antwort – nachhaltige Mode beginnt im \
     eigenen Schrank! Erzähl mir, was du schon besitzt, und wir zaubern daraus \
     etwas Frisches. ✨",
];

const PURCHASE_EN: &[&str] = &[
    "Before buying something new, let's look into your wardrobe first! There is \
     often a great outfit already hiding there, just waiting for a fresh \
     combination. What's hanging in your closet right now? 🌿",
    "Buying new isn't always the answer – sustainable style starts with what you \
     own! Tell me what's already in your wardrobe and we'll create something \
     fresh from it. ✨",
];

const GENDER_QUESTION_DE: &[&str] = &[
    "Gerne! Für wen soll das Outfit sein – Frau, Mann oder divers?",
    "Sehr gern! Damit ich passend beraten kann: Suchst du ein Outfit für eine \
     Frau, einen Mann oder divers?",
];

const GENDER_QUESTION_EN: &[&str] = &[
    "Happy to help! Who is the outfit for – a woman, a man, or diverse?",
    "Of course! So I can style you properly: are we dressing a woman, a man, or \
     diverse?",
];

const WARDROBE_CHECK_DE: &[&str] = &[
    "Super! Bevor ich dir etwas vorschlage: Was hast du denn schon im \
     Kleiderschrank? Lieblingsteile zuerst – daraus bauen wir dein Outfit auf! 💫",
    "Perfekt! Lass uns mit dem arbeiten, was du schon besitzt. Welche Teile \
     trägst du am liebsten? Daraus stylen wir etwas Neues! 🌟",
];

const WARDROBE_CHECK_EN: &[&str] = &[
    "Great! Before I suggest anything: what do you already have in your wardrobe? \
     Favorite pieces first – we'll build your outfit from those! 💫",
    "Perfect! Let's work with what you already own. Which pieces do you love \
     wearing most? We'll style something new from them! 🌟",
];

/// Static mapping from `(ReplyKind, Language)` to candidate reply texts.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReplyTable;

impl ReplyTable {
    pub fn new() -> Self {
        Self
    }

    /// All candidate replies for one key, in fixed order.
    pub fn candidates(kind: ReplyKind, language: Language) -> &'static [&'static str] {
        match (kind, language) {
            (ReplyKind::Negative, Language::German) => NEGATIVE_DE,
            (ReplyKind::Negative, Language::English) => NEGATIVE_EN,
            (ReplyKind::Purchase, Language::German) => PURCHASE_DE,
            (ReplyKind::Purchase, Language::English) => PURCHASE_EN,
            (ReplyKind::GenderQuestion, Language::German) => GENDER_QUESTION_DE,
            (ReplyKind::GenderQuestion, Language::English) => GENDER_QUESTION_EN,
            (ReplyKind::WardrobeCheck, Language::German) => WARDROBE_CHECK_DE,
            (ReplyKind::WardrobeCheck, Language::English) => WARDROBE_CHECK_EN,
        }
    }

    /// Uniform-random selection among the candidates for one key.
    ///
    /// The random source is injected so selection is deterministic under
    /// test and random in production.
    pub fn pick(&self, kind: ReplyKind, language: Language, rng: &mut impl Rng) -> &'static str {
        let candidates = Self::candidates(kind, language);
        candidates[rng.gen_range(0..candidates.len())]
    }

    /// Startup invariant: every reachable `(kind, language)` key must map
    /// to at least one candidate. A violation is a construction defect,
    /// checked once at pipeline init rather than surfacing at runtime.
    pub fn verify() -> Result<(), StyleMateError> {
        for &kind in ALL_KINDS {
            for &language in ALL_LANGUAGES {
                if Self::candidates(kind, language).is_empty() {
                    return Err(StyleMateError::ReplyTable(format!(
                        "empty candidate set for {kind:?}/{language:?}"
                    )));
                }
            }
        }
        Ok(())
    }
}
