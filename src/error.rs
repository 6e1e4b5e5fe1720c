//! Error types for coffee-skill

use thiserror::Error;

/// Errors that can fail a skill invocation
///
/// A failed invocation surfaces as an internal error on the platform
/// side; the user hears the platform's generic error prompt. A missing
/// or unparsable slot value is not an error; the intent handler
/// recovers it with a clarifying re-prompt.
#[derive(Debug, Error)]
pub enum SkillError {
    /// The top-level request type is none of the known request types
    #[error("Unroutable request type")]
    UnroutableRequestType,

    /// The intent name is neither the skill's custom intent nor the
    /// platform's built-in help intent
    #[error("Unknown intent: {0}")]
    UnknownIntent(String),

    /// Serialization/deserialization failure
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for skill operations
pub type Result<T> = std::result::Result<T, SkillError>;
