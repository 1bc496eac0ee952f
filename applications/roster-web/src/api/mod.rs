//! Browser-facing routes
//!
//! - `page`: the rendered user list
//! - `actions`: form posts mapped to view actions
//! - `health`: load status of the user list

pub mod actions;
pub mod health;
pub mod page;
