//! Intent routing: selects one handling path per classified message.

use crate::session::Session;
use crate::types::{Classification, Gender, PendingIntent, RoutePath, Sentiment, Topic};

/// Select the handling path for one message. First match wins:
///
/// 1. negative sentiment → canned-negative (regardless of topic keywords,
///    pending state untouched);
/// 2. an outstanding gender clarification → recognized answer resolves to
///    the wardrobe-check reply and clears the pending state; an
///    unrecognized answer re-issues the clarification, pending preserved;
/// 3. purchase-intent AND outfit-request keywords → canned-purchase;
/// 4. outfit-request keywords alone → ask the gender clarification and arm
///    the pending state with the original query;
/// 5. otherwise → retrieval.
pub fn route(session: &mut Session, class: &Classification, text: &str) -> RoutePath {
    if class.sentiment == Sentiment::Negative {
        return RoutePath::CannedNegative;
    }

    if let Some(PendingIntent::GenderClarification { .. }) = session.pending() {
        return if Gender::recognize(text).is_some() {
            session.clear_pending();
            RoutePath::WardrobeCheck
        } else {
            tracing::info!(session = %session.id, "unrecognized gender answer, re-prompting");
            RoutePath::GenderClarification
        };
    }

    match class.topic {
        Topic::PurchaseIntent => RoutePath::CannedPurchase,
        Topic::OutfitRequest => {
            session.set_pending(PendingIntent::GenderClarification {
                original_query: text.to_string(),
            });
            RoutePath::GenderClarification
        }
        _ => RoutePath::Retrieval,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;

    fn route_text(session: &mut Session, text: &str) -> RoutePath {
        let class = classify(text);
        route(session, &class, text)
    }

    #[test]
    fn negative_wins_over_topic_keywords() {
        let mut session = Session::new();
        assert_eq!(
            route_text(&mut session, "dieses outfit ist hässlich"),
            RoutePath::CannedNegative
        );
        // Topic keywords were present, but no pending state was armed.
        assert!(session.pending().is_none());
    }

    #[test]
    fn no_keywords_routes_to_retrieval() {
        let mut session = Session::new();
        assert_eq!(
            route_text(&mut session, "was passt zu einer jeans"),
            RoutePath::Retrieval
        );
    }

    #[test]
    fn outfit_request_arms_gender_clarification() {
        let mut session = Session::new();
        assert_eq!(
            route_text(&mut session, "ich brauche ein outfit"),
            RoutePath::GenderClarification
        );
        assert!(session.pending().is_some());
    }

    #[test]
    fn unrecognized_followup_reprompts_and_keeps_pending() {
        let mut session = Session::new();
        route_text(&mut session, "ich brauche ein outfit");
        assert_eq!(
            route_text(&mut session, "xyz"),
            RoutePath::GenderClarification
        );
        assert!(session.pending().is_some());
    }

    #[test]
    fn recognized_gender_resolves_and_clears_pending() {
        let mut session = Session::new();
        route_text(&mut session, "ich brauche ein outfit");
        route_text(&mut session, "xyz");
        assert_eq!(route_text(&mut session, "Frau"), RoutePath::WardrobeCheck);
        assert!(session.pending().is_none());
    }

    #[test]
    fn purchase_plus_outfit_routes_to_canned_purchase() {
        let mut session = Session::new();
        assert_eq!(
            route_text(&mut session, "should i buy a new outfit"),
            RoutePath::CannedPurchase
        );
    }
}
