//! # System Lifecycle
//!
//! Starting, wiring and stopping the registry's moving parts.
//!
//! ## The UserSystem Pattern
//!
//! The [`UserSystem`] creates the User actor, injects its validation context at `run()` time and
//! keeps the task handle for shutdown:
//!
//! ```rust,ignore
//! let (actor, user_client) = user_actor::new(buffer_size);
//! let handle = tokio::spawn(actor.run(BirthDatePolicy::new(min_age)));
//! ```
//!
//! Injecting the policy at `run()` rather than at construction means the same actor type serves
//! production (local calendar, configured age) and tests (fixed clock, any threshold).
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients**: closes the sender side of the channel
//! 2. **Actor detects closure**: `receiver.recv()` returns `None` after queued requests drain
//! 3. **Await completion**: the task handle resolves, or reports a panic
//!
//! ## Observability & Tracing
//!
//! [`setup_tracing`] initializes the subscriber; see the [`tracing`] module.

pub mod tracing;
pub mod user_system;

pub use tracing::*;
pub use user_system::*;
