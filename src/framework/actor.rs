//! # Store Actor
//!
//! This module defines the `StoreActor`, the single writer that owns a keyed collection of
//! records. It processes requests sequentially, so every operation observes and leaves behind a
//! consistent map without any lock around the collection.

use crate::framework::client::StoreClient;
use crate::framework::entity::KeyedEntity;
use crate::framework::error::StoreError;
use crate::framework::message::StoreRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a keyed collection of records.
///
/// # Concurrency Model
///
/// The actor runs in its own Tokio task and is the only owner of `store`. Clients send
/// [`StoreRequest`]s over an mpsc channel and wait on a oneshot reply, so each public operation
/// is atomic with respect to every other one.
///
/// # Operations
///
/// * **Get**: clone of the record under the key, or `NotFound`.
/// * **List** / **Query**: snapshot of all (or all matching) records.
/// * **Create**:
///     1. Rejects with `AlreadyExists` if the record's key is taken.
///     2. Calls [`KeyedEntity::validate`].
///     3. Inserts and returns the stored record.
/// * **Replace**:
///     1. Calls [`KeyedEntity::validate`]; the old entry survives a failure.
///     2. Removes the entry under the given key, which need not exist.
///     3. Inserts the record under its own key.
/// * **Patch**:
///     1. Looks up the existing record (`NotFound` if absent).
///     2. Merges the patch via [`KeyedEntity::merge`].
///     3. Applies the `Create` rules as if the old entry were already gone, so a changed key
///        that collides is `AlreadyExists`.
///     4. Only then swaps the old entry for the merged one.
/// * **Delete**: removes the key, or `NotFound`.
/// * **Clear**: empties the collection.
pub struct StoreActor<T: KeyedEntity> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    store: HashMap<T::Key, T>,
}

impl<T: KeyedEntity> StoreActor<T> {
    /// Creates a new `StoreActor` and its associated `StoreClient`.
    ///
    /// `buffer_size` is the capacity of the request channel; when it is full, client calls wait
    /// for space.
    pub fn new(buffer_size: usize) -> (Self, StoreClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
        };
        let client = StoreClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop until every client has been dropped.
    ///
    /// The `context` is handed to [`KeyedEntity::validate`] on every write.
    pub async fn run(mut self, context: T::Context) {
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Get { key, respond_to } => {
                    let result = self
                        .store
                        .get(&key)
                        .cloned()
                        .ok_or_else(|| StoreError::NotFound(key.to_string()));
                    debug!(entity_type, %key, found = result.is_ok(), "Get");
                    let _ = respond_to.send(result);
                }
                StoreRequest::List { respond_to } => {
                    let items: Vec<T> = self.store.values().cloned().collect();
                    debug!(entity_type, count = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                StoreRequest::Query { filter, respond_to } => {
                    let items: Vec<T> = self
                        .store
                        .values()
                        .filter(|item| item.matches(&filter))
                        .cloned()
                        .collect();
                    debug!(entity_type, ?filter, count = items.len(), "Query");
                    let _ = respond_to.send(Ok(items));
                }
                StoreRequest::Create { item, respond_to } => {
                    let key = item.key();
                    debug!(entity_type, %key, "Create");
                    let _ = respond_to.send(self.insert_new(entity_type, item, &context));
                }
                StoreRequest::Replace {
                    key,
                    item,
                    respond_to,
                } => {
                    debug!(entity_type, %key, new_key = %item.key(), "Replace");
                    if let Err(e) = item.validate(&context) {
                        warn!(entity_type, %key, error = %e, "Replace rejected");
                        let _ = respond_to.send(Err(StoreError::Entity(e)));
                        continue;
                    }
                    self.store.remove(&key);
                    self.store.insert(item.key(), item.clone());
                    info!(entity_type, %key, size = self.store.len(), "Replaced");
                    let _ = respond_to.send(Ok(item));
                }
                StoreRequest::Patch {
                    key,
                    patch,
                    respond_to,
                } => {
                    debug!(entity_type, %key, ?patch, "Patch");
                    let Some(existing) = self.store.get(&key).cloned() else {
                        warn!(entity_type, %key, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(key.to_string())));
                        continue;
                    };
                    let merged = existing.merge(patch);
                    let result = self.swap(entity_type, &key, merged, &context);
                    let _ = respond_to.send(result);
                }
                StoreRequest::Delete { key, respond_to } => {
                    debug!(entity_type, %key, "Delete");
                    if self.store.remove(&key).is_some() {
                        info!(entity_type, %key, size = self.store.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, %key, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(key.to_string())));
                    }
                }
                StoreRequest::Clear { respond_to } => {
                    let removed = self.store.len();
                    self.store.clear();
                    info!(entity_type, removed, "Cleared");
                    let _ = respond_to.send(Ok(()));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    fn insert_new(
        &mut self,
        entity_type: &str,
        item: T,
        context: &T::Context,
    ) -> Result<T, StoreError<T::Error>> {
        let key = item.key();
        if self.store.contains_key(&key) {
            warn!(entity_type, %key, "Already exists");
            return Err(StoreError::AlreadyExists(key.to_string()));
        }
        if let Err(e) = item.validate(context) {
            warn!(entity_type, %key, error = %e, "Create rejected");
            return Err(StoreError::Entity(e));
        }
        self.store.insert(key.clone(), item.clone());
        info!(entity_type, %key, size = self.store.len(), "Created");
        Ok(item)
    }

    /// Moves the entry under `old_key` to `merged`, checking it as a fresh insert first.
    fn swap(
        &mut self,
        entity_type: &str,
        old_key: &T::Key,
        merged: T,
        context: &T::Context,
    ) -> Result<T, StoreError<T::Error>> {
        let key = merged.key();
        if key != *old_key && self.store.contains_key(&key) {
            warn!(entity_type, %old_key, %key, "Already exists");
            return Err(StoreError::AlreadyExists(key.to_string()));
        }
        if let Err(e) = merged.validate(context) {
            warn!(entity_type, %old_key, error = %e, "Patch rejected");
            return Err(StoreError::Entity(e));
        }
        self.store.remove(old_key);
        self.store.insert(key.clone(), merged.clone());
        info!(entity_type, %old_key, %key, size = self.store.len(), "Patched");
        Ok(merged)
    }
}
