//! Generic single-writer store for keyed records.
//!
//! This module provides the building blocks for holding a collection of records in memory
//! behind an actor, with uniqueness, validation and patch-merge handled uniformly.
//!
//! # Main Components
//!
//! - [`KeyedEntity`] - Trait that record types implement to be stored
//! - [`StoreActor`] - The actor that owns the keyed collection
//! - [`StoreClient`] - Cloneable, type-safe handle for sending requests
//! - [`StoreError`] - Store-level failures wrapping the entity's own error
//!
//! # Testing
//!
//! See [`mock`] for a scripted client that needs no running actor.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::StoreActor;
pub use client::StoreClient;
pub use entity::KeyedEntity;
pub use error::StoreError;
pub use message::{Response, StoreRequest};
