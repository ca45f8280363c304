//! Chat pipeline for Asha.
//!
//! Turns one user message into a session-aware reply: intent
//! classification, optional bias rewrite, per-domain record lookups and
//! reply composition, with bounded per-session history.

pub mod bias;
pub mod error;
pub mod intent;
pub mod orchestrator;
pub mod response;
pub mod session;
pub mod types;

pub use bias::BiasMitigator;
pub use error::ChatError;
pub use intent::IntentClassifier;
pub use orchestrator::ChatOrchestrator;
pub use response::ResponseComposer;
pub use session::SessionStore;
pub use types::{ChatRequest, ChatResponse, IntentResult};
