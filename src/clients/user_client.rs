//! # User Client
//!
//! High-level API for the User store. Wraps a `StoreClient<User>` and exposes the registry
//! operations under their domain names, returning [`UserError`] throughout.

use crate::clients::actor_client::ActorClient;
use crate::domain::{BirthDateRange, User, UserPatch};
use crate::framework::{StoreClient, StoreError};
use crate::user_actor::UserError;
use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::{debug, instrument};

/// Client for interacting with the User actor.
#[derive(Clone)]
pub struct UserClient {
    inner: StoreClient<User>,
}

impl UserClient {
    pub fn new(inner: StoreClient<User>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<User> for UserClient {
    type Error = UserError;

    fn inner(&self) -> &StoreClient<User> {
        &self.inner
    }

    fn map_error(e: StoreError<UserError>) -> Self::Error {
        match e {
            StoreError::NotFound(email) => UserError::NotFound(email),
            StoreError::AlreadyExists(email) => UserError::AlreadyExists(email),
            StoreError::Entity(e) => e,
            closed @ (StoreError::ActorClosed | StoreError::ActorDropped) => {
                UserError::ActorCommunicationError(closed.to_string())
            }
        }
    }
}

impl UserClient {
    pub async fn find_by_email(&self, email: &str) -> Result<User, UserError> {
        self.get(email.to_string()).await
    }

    pub async fn find_all(&self) -> Result<Vec<User>, UserError> {
        self.list().await
    }

    /// Users born strictly between `from` and `to`.
    #[instrument(skip(self))]
    pub async fn find_in_birth_date_range(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<User>, UserError> {
        debug!("Sending request");
        self.inner
            .query(BirthDateRange::new(from, to))
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self, user), fields(email = %user.email))]
    pub async fn save(&self, user: User) -> Result<User, UserError> {
        debug!("Sending request");
        self.inner.create(user).await.map_err(Self::map_error)
    }

    /// Replaces the user under `email`; `user` may carry a different email.
    #[instrument(skip(self, user), fields(new_email = %user.email))]
    pub async fn update(&self, email: &str, user: User) -> Result<User, UserError> {
        debug!("Sending request");
        self.inner
            .replace(email.to_string(), user)
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self, patch))]
    pub async fn patch(&self, email: &str, patch: UserPatch) -> Result<User, UserError> {
        debug!(fields = ?patch.present_fields(), "Sending request");
        self.inner
            .patch(email.to_string(), patch)
            .await
            .map_err(Self::map_error)
    }

    pub async fn delete_by_email(&self, email: &str) -> Result<(), UserError> {
        self.delete(email.to_string()).await
    }

    pub async fn delete_all(&self) -> Result<(), UserError> {
        self.clear().await
    }
}
