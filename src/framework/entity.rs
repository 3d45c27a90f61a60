//! # KeyedEntity Trait
//!
//! The `KeyedEntity` trait is the contract a record type implements to be held by a
//! [`StoreActor`](crate::framework::StoreActor). The record carries its own key, knows how to
//! validate itself against a runtime context, how to absorb a partial update, and how to answer a
//! filter query. The actor supplies everything else: uniqueness, lookups, sequencing and rollback.
//!
//! # Associated Types
//!
//! - `Key` - the unique lookup key, taken from the record itself (e.g. an email address).
//! - `Patch` - the partial record accepted by `patch`.
//! - `Filter` - the predicate payload accepted by `query`.
//! - `Context` - runtime dependencies handed to [`KeyedEntity::validate`]. Use `()` if none.
//! - `Error` - the entity's own business-rule error.
//!
//! # Provided Methods
//!
//! [`KeyedEntity::validate`] defaults to accepting every record.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any record type must implement to be managed by a `StoreActor`.
///
/// Unlike an id-allocating store, the key is a property of the record. Inserting a record whose
/// key is already taken is a collision, and replacing a record may move it to a new key.
pub trait KeyedEntity: Clone + Send + Sync + 'static {
    /// The unique key this record is stored under.
    type Key: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// Partial record used for field-wise merges.
    type Patch: Send + Sync + Debug;

    /// Payload describing which records a query selects.
    type Filter: Send + Sync + Debug;

    /// The runtime context injected into the actor when it starts running.
    type Context: Send + Sync;

    /// Business-rule failures raised by [`KeyedEntity::validate`].
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns the key this record must be stored under.
    fn key(&self) -> Self::Key;

    /// Checks the record against business rules before it is written.
    ///
    /// Called for every insert and replacement. A failure leaves the store untouched.
    fn validate(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Overlays the present fields of `patch` onto `self`.
    fn merge(self, patch: Self::Patch) -> Self;

    /// Whether this record is selected by `filter`.
    fn matches(&self, filter: &Self::Filter) -> bool;
}
