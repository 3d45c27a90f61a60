//! # User Actor
//!
//! The User store: one [`StoreActor`] holding every [`User`] keyed by email.
//!
//! ## Structure
//!
//! - [`entity`] - [`KeyedEntity`](crate::framework::KeyedEntity) implementation for [`User`]
//! - [`validation`] - [`BirthDatePolicy`], the context every write is checked against
//! - [`error`] - [`UserError`], the domain taxonomy
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use user_registry::domain::User;
//! use user_registry::user_actor::{self, BirthDatePolicy};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = user_actor::new(32);
//!     tokio::spawn(actor.run(BirthDatePolicy::new(18)));
//!
//!     let birth_date = NaiveDate::from_ymd_opt(2000, 1, 1).ok_or("bad date")?;
//!     let user = User::new("a@x.com", "A", "B", birth_date);
//!     client.save(user).await?;
//!     assert_eq!(client.find_all().await?.len(), 1);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;
pub mod validation;

pub use error::*;
pub use validation::BirthDatePolicy;

use crate::clients::UserClient;
use crate::domain::User;
use crate::framework::StoreActor;

/// Creates a new User actor and its client.
pub fn new(buffer_size: usize) -> (StoreActor<User>, UserClient) {
    let (actor, generic_client) = StoreActor::new(buffer_size);
    let client = UserClient::new(generic_client);

    (actor, client)
}
