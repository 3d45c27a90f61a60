//! Pure data structures held by the store.

#[macro_use]
pub mod shape;

pub mod email;
pub mod user;

pub use email::is_valid_email;
pub use shape::PatchField;
pub use user::*;
