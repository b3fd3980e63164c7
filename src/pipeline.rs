//! Turn-dispatch pipeline orchestrator.
//!
//! One call to [`Pipeline::execute_turn`] processes one user submission to
//! completion: vision descriptions, transcript updates, classification,
//! routing, fragment streaming, and the final transcript commit. The
//! `&mut self` receiver enforces the cooperative model — a session streams
//! one response to completion before the next turn is accepted.

use crate::classify::classify;
use crate::config::{Config, MAX_INPUT_LENGTH};
use crate::error::StyleMateError;
use crate::replies::{ReplyKind, ReplyTable};
use crate::retrieval::{PromptTemplate, QueryEngine};
use crate::router::route;
use crate::session::Session;
use crate::stream::{FragmentSource, StreamingPresenter};
use crate::types::{ImageNotes, RoutePath, Submission};
use crate::vision::ImageDescriber;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

/// Conversation pipeline for one session.
///
/// Boundary collaborators are shared (`Arc<dyn ...>`) so multiple sessions
/// can reuse one query engine and vision client, while transcript and
/// pending-intent state stay strictly per-session.
pub struct Pipeline {
    config: Config,
    session: Session,
    query_engine: Arc<dyn QueryEngine>,
    vision: Arc<dyn ImageDescriber>,
    replies: ReplyTable,
    template: PromptTemplate,
    presenter: StreamingPresenter,
    rng: StdRng,
}

impl Pipeline {
    /// Create a pipeline with a fresh session.
    ///
    /// Checks the canned-reply table invariant once at construction so an
    /// empty candidate set can never surface mid-conversation.
    pub fn new(
        config: Config,
        query_engine: Arc<dyn QueryEngine>,
        vision: Arc<dyn ImageDescriber>,
    ) -> Result<Self, StyleMateError> {
        ReplyTable::verify()?;
        let presenter = StreamingPresenter::new(config.stream_config());
        Ok(Self {
            config,
            session: Session::new(),
            query_engine,
            vision,
            replies: ReplyTable::new(),
            template: PromptTemplate::default(),
            presenter,
            rng: StdRng::from_entropy(),
        })
    }

    /// Replace the random source with a seeded one (deterministic canned
    /// selection under test).
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Replace the default prompt template.
    pub fn with_template(mut self, template: PromptTemplate) -> Self {
        self.template = template;
        self
    }

    /// Read-only view of the session (transcript + pending state).
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Execute one full conversation turn, streaming partial output via
    /// `on_partial` and returning the final committed reply text.
    ///
    /// The image-note accumulator is a request-scoped local: it is folded
    /// into the outgoing message and dropped when this call returns,
    /// success or error.
    pub async fn execute_turn<F>(
        &mut self,
        submission: Submission,
        on_partial: F,
    ) -> Result<String, StyleMateError>
    where
        F: FnMut(&str) + Send,
    {
        let text = self.validate(&submission)?;

        // Describe attachments and record them as user turns.
        let mut notes = ImageNotes::new();
        for path in &submission.attachments {
            let bytes = tokio::fs::read(path).await?;
            let description = self.vision.describe(&bytes).await?;
            tracing::info!(session = %self.session.id, path = %path.display(), "image described");
            notes.push(description);
            self.session.push_attachment(path.clone());
        }

        if !text.is_empty() {
            self.session.push_user_text(text.as_str());
        }

        // Classification runs over the message with image notes folded in,
        // so descriptions participate in language and keyword matching.
        let effective = notes.fold_into(&text);
        let class = classify(&effective);
        let path = route(&mut self.session, &class, &text);
        tracing::info!(session = %self.session.id, ?path, language = ?class.language, "turn routed");

        let source = match path {
            RoutePath::Retrieval => {
                let context = self.session.context_window();
                let prompt = self.template.render(&context, &effective);
                self.query_engine.query(&prompt).await?
            }
            canned => {
                let kind = match canned {
                    RoutePath::CannedNegative => ReplyKind::Negative,
                    RoutePath::CannedPurchase => ReplyKind::Purchase,
                    RoutePath::GenderClarification => ReplyKind::GenderQuestion,
                    RoutePath::WardrobeCheck => ReplyKind::WardrobeCheck,
                    RoutePath::Retrieval => unreachable!(),
                };
                let reply = self.replies.pick(kind, class.language, &mut self.rng);
                FragmentSource::from_text(reply, self.config.stream_config().granularity)
            }
        };

        // Stream to completion; commit only on natural exhaustion.
        let final_text = self.presenter.present(source, on_partial).await?;
        self.session.push_assistant(&final_text);
        Ok(final_text)
    }

    /// Validate the submission: bounded, and non-empty unless attachments
    /// carry the content.
    fn validate(&self, submission: &Submission) -> Result<String, StyleMateError> {
        let text = submission.text.trim().to_string();
        if text.is_empty() && submission.attachments.is_empty() {
            return Err(StyleMateError::InputValidation(
                "Input cannot be empty".to_string(),
            ));
        }
        if text.len() > MAX_INPUT_LENGTH {
            return Err(StyleMateError::InputValidation(
                "Input too long".to_string(),
            ));
        }
        Ok(text)
    }
}
