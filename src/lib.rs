//! StyleMate conversation core.
//!
//! Turn dispatch for a retrieval-augmented styling assistant: keyword
//! classification, intent routing with a two-turn clarification sub-dialog,
//! canned replies, and paced fragment streaming. The binary (`main.rs`) and
//! integration tests (`tests/`) both import from this crate root.

pub mod classify;
pub mod config;
pub mod error;
pub mod language;
pub mod pipeline;
pub mod replies;
pub mod retrieval;
pub mod router;
pub mod session;
pub mod stream;
pub mod types;
pub mod vision;
