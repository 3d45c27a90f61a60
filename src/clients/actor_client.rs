//! # ActorClient Trait
//!
//! Common interface for resource-specific clients: default read and delete operations built on
//! top of a generic [`StoreClient`], with errors translated into the resource's own type.

use crate::framework::{KeyedEntity, StoreClient, StoreError};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard store operations.
///
/// Implementors only provide access to the inner client and an error mapping; `get`, `list`,
/// `delete` and `clear` come for free.
#[async_trait]
pub trait ActorClient<T: KeyedEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic StoreClient.
    fn inner(&self) -> &StoreClient<T>;

    /// Map store errors to the specific resource error type.
    fn map_error(e: StoreError<T::Error>) -> Self::Error;

    /// Fetch a record by key.
    #[tracing::instrument(skip(self))]
    async fn get(&self, key: T::Key) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(key).await.map_err(Self::map_error)
    }

    /// Snapshot of every stored record.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Delete a record by key.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, key: T::Key) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(key).await.map_err(Self::map_error)
    }

    /// Remove every record.
    #[tracing::instrument(skip(self))]
    async fn clear(&self) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().clear().await.map_err(Self::map_error)
    }
}
