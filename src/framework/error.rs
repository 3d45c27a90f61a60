//! # Store Errors
//!
//! Failures the store itself can produce, independent of the record type. Keyed failures
//! (`NotFound`, `AlreadyExists`) are raised by the actor because only it sees the whole map;
//! everything rule-specific travels through `Entity`.

/// Errors that can occur within the store framework.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum StoreError<E> {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Item already exists: {0}")]
    AlreadyExists(String),
    #[error("Entity error: {0}")]
    Entity(E),
}
