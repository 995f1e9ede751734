//! Error types for the Resource actor.

use thiserror::Error;

/// Errors that can occur during resource operations.
///
/// The store accepts every well-formed record, so at runtime the only failure left is
/// reaching it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResourceError {
    /// A seed record could not be loaded into the store before it started.
    #[error("Invalid seed record: {0}")]
    InvalidSeed(String),

    /// Mailbox or event buffer sizes the store cannot start with.
    #[error("Invalid store settings: {0}")]
    InvalidSettings(String),

    /// The store could not be reached or did not answer.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for ResourceError {
    fn from(msg: String) -> Self {
        ResourceError::ActorCommunicationError(msg)
    }
}
