//! Error types for the User actor.

use thiserror::Error;

/// Errors that can occur during user operations.
///
/// `NotFound`, `AlreadyExists` and `ValidationFailed` are the domain outcomes callers are
/// expected to handle. `ActorCommunicationError` means the store itself is unreachable and is
/// never a statement about the data.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserError {
    /// No user is stored under the email.
    #[error("User with email {0} was not found")]
    NotFound(String),

    /// A user with the same email already exists.
    #[error("User with email {0} already exists")]
    AlreadyExists(String),

    /// A business rule rejected the user.
    #[error("{0}")]
    ValidationFailed(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl UserError {
    /// Whether this is one of the three domain outcomes rather than an infrastructure failure.
    pub fn is_domain(&self) -> bool {
        !matches!(self, UserError::ActorCommunicationError(_))
    }
}

impl From<String> for UserError {
    fn from(msg: String) -> Self {
        UserError::ActorCommunicationError(msg)
    }
}
