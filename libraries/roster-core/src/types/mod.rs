//! Domain types
//!
//! - `ids`: the `UserId` reconciliation key
//! - `user`: user records as held in the view and sent over the wire

pub mod ids;
pub mod user;

pub use ids::UserId;
pub use user::{User, UserFields, UserRecord};
