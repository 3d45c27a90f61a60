//! # Generic Client
//!
//! This module defines the generic client for communicating with a store actor.

use crate::framework::entity::KeyedEntity;
use crate::framework::error::StoreError;
use crate::framework::message::{Response, StoreRequest};
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for interacting with a `StoreActor`.
///
/// Holds only the sender half of the request channel, so cloning is cheap and clones can be
/// shared freely across tasks. Every method sends one request and awaits the actor's reply.
pub struct StoreClient<T: KeyedEntity> {
    sender: mpsc::Sender<StoreRequest<T>>,
}

// Manual impl: a derive would demand `T: Clone` on the impl rather than on the sender.
impl<T: KeyedEntity> Clone for StoreClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: KeyedEntity> StoreClient<T> {
    pub fn new(sender: mpsc::Sender<StoreRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R, T::Error>) -> StoreRequest<T>,
    ) -> Result<R, StoreError<T::Error>> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }

    pub async fn get(&self, key: T::Key) -> Result<T, StoreError<T::Error>> {
        self.request(|respond_to| StoreRequest::Get { key, respond_to })
            .await
    }

    pub async fn list(&self) -> Result<Vec<T>, StoreError<T::Error>> {
        self.request(|respond_to| StoreRequest::List { respond_to })
            .await
    }

    pub async fn query(&self, filter: T::Filter) -> Result<Vec<T>, StoreError<T::Error>> {
        self.request(|respond_to| StoreRequest::Query { filter, respond_to })
            .await
    }

    pub async fn create(&self, item: T) -> Result<T, StoreError<T::Error>> {
        self.request(|respond_to| StoreRequest::Create { item, respond_to })
            .await
    }

    pub async fn replace(&self, key: T::Key, item: T) -> Result<T, StoreError<T::Error>> {
        self.request(|respond_to| StoreRequest::Replace {
            key,
            item,
            respond_to,
        })
        .await
    }

    pub async fn patch(&self, key: T::Key, patch: T::Patch) -> Result<T, StoreError<T::Error>> {
        self.request(|respond_to| StoreRequest::Patch {
            key,
            patch,
            respond_to,
        })
        .await
    }

    pub async fn delete(&self, key: T::Key) -> Result<(), StoreError<T::Error>> {
        self.request(|respond_to| StoreRequest::Delete { key, respond_to })
            .await
    }

    pub async fn clear(&self) -> Result<(), StoreError<T::Error>> {
        self.request(|respond_to| StoreRequest::Clear { respond_to })
            .await
    }
}
