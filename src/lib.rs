//! # User Registry
//!
//! > **An in-memory user record store behind a single-writer actor.**
//!
//! Users are keyed by email and held by one Tokio task that processes every request in order.
//! Reads, writes, partial updates and birth-date range queries go through a cheap, cloneable
//! client. An `axum` REST layer sits on top.
//!
//! ## Design
//!
//! ### One Writer, No Locks
//! The [`StoreActor`](framework::StoreActor) owns the `HashMap` outright. Every operation is a
//! message answered on a oneshot channel, so each is atomic with respect to all others: a failed
//! `save`, `update` or `patch` leaves the store exactly as it was.
//!
//! ### Generic Store, Typed Entity
//! The actor is written once against [`KeyedEntity`](framework::KeyedEntity). The entity supplies
//! its key, its validation (with a context injected at `run()` time), its patch merge and its
//! query filter. For users that is the email, the [`BirthDatePolicy`](user_actor::BirthDatePolicy),
//! the [`UserPatch`](domain::UserPatch) overlay and the [`BirthDateRange`](domain::BirthDateRange).
//!
//! ### Patches Without Reflection
//! [`User`](domain::User) is declared with `record_shape!`, which derives the partial
//! [`UserPatch`](domain::UserPatch) and its field-by-field merge from the same field list.
//! Absent fields, and empty strings, leave the stored value alone.
//!
//! ### Errors
//! [`UserError`](user_actor::UserError) has three domain kinds (`NotFound`, `AlreadyExists`,
//! `ValidationFailed`) and one infrastructure kind for an unreachable store. Only the
//! [`http`] layer turns them into status codes.
//!
//! ## Module Tour
//!
//! - [`framework`]: the generic actor, its client, messages, errors and a `MockClient` for tests
//! - [`domain`]: the `User` record, its patch, the range filter and the email check
//! - [`user_actor`]: the User store's entity impl, validation policy and error taxonomy
//! - [`clients`]: [`UserClient`](clients::UserClient), the domain API over the store
//! - [`lifecycle`]: [`UserSystem`](lifecycle::UserSystem) startup/shutdown and tracing setup
//! - [`config`]: TOML plus environment configuration
//! - [`http`]: REST routes and error responses
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=info cargo run
//! USER_REGISTRY_MIN_AGE=21 USER_REGISTRY_PORT=9000 cargo run
//! cargo test
//! ```

#[macro_use]
pub mod domain;

pub mod clients;
pub mod config;
pub mod framework;
pub mod http;
pub mod lifecycle;
pub mod user_actor;
