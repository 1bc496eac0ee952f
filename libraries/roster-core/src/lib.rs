//! Roster Core
//!
//! Platform-agnostic domain types for the Roster user list.
//!
//! This crate is shared by the HTTP client, the view state machine and the
//! rendering host. It holds no I/O.
//!
//! # Example
//!
//! ```rust
//! use roster_core::{User, UserFields, UserId};
//!
//! let fields = UserFields::new("Ann", "a@x.com", "ann", "ann.dev");
//! let user = User::local(UserId::new(1_700_000_000_000), fields);
//!
//! assert!(user.is_new);
//! assert_eq!(user.fields.name, "Ann");
//! ```

#![forbid(unsafe_code)]

pub mod types;

pub use types::{User, UserFields, UserId, UserRecord};
