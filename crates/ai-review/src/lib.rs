//! AI-assisted document review
//!
//! Sends document text to an OpenAI-compatible chat API with a
//! document-type-specific instruction bundle and parses the structured
//! JSON review it returns. Degrades to a canned demo report when no API
//! key is configured or the response fails to parse.

pub mod error;
pub mod fallback;
pub mod prompts;
pub mod provider;
pub mod reviewer;

pub use error::ReviewError;
pub use prompts::ReviewDocType;
pub use provider::{ChatProvider, OpenAiProvider};
pub use reviewer::{FallbackReason, ReviewOutcome, Reviewer};
