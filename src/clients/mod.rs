//! Type-safe wrappers around [`StoreClient`](crate::framework::StoreClient).

pub mod actor_client;
pub mod user_client;

pub use actor_client::*;
pub use user_client::*;
