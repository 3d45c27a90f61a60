//! # Store Messages
//!
//! The request type sent from a [`StoreClient`](crate::framework::StoreClient) to a
//! [`StoreActor`](crate::framework::StoreActor). Every variant carries a oneshot sender the actor
//! answers on, so each request is a self-contained unit of work.

use crate::framework::entity::KeyedEntity;
use crate::framework::error::StoreError;
use tokio::sync::oneshot;

/// One-shot response channel used by the actor.
pub type Response<T, E> = oneshot::Sender<Result<T, StoreError<E>>>;

/// Request sent to the actor.
///
/// The variants cover the full record lifecycle:
///
/// - **Get** / **List** / **Query**: reads. `List` and `Query` return materialized snapshots.
/// - **Create**: insert under the record's own key, rejecting collisions.
/// - **Replace**: full replacement; the record may land under a different key.
/// - **Patch**: field-wise merge onto the existing record, then insert with `Create` rules.
/// - **Delete** / **Clear**: removal of one key or of everything.
#[derive(Debug)]
pub enum StoreRequest<T: KeyedEntity> {
    Get {
        key: T::Key,
        respond_to: Response<T, T::Error>,
    },
    List {
        respond_to: Response<Vec<T>, T::Error>,
    },
    Query {
        filter: T::Filter,
        respond_to: Response<Vec<T>, T::Error>,
    },
    Create {
        item: T,
        respond_to: Response<T, T::Error>,
    },
    Replace {
        key: T::Key,
        item: T,
        respond_to: Response<T, T::Error>,
    },
    Patch {
        key: T::Key,
        patch: T::Patch,
        respond_to: Response<T, T::Error>,
    },
    Delete {
        key: T::Key,
        respond_to: Response<(), T::Error>,
    },
    Clear {
        respond_to: Response<(), T::Error>,
    },
}
