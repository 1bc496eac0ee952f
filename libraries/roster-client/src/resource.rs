//! The remote collection seen as a trait.

use crate::error::Result;
use async_trait::async_trait;
use roster_core::{User, UserFields, UserId, UserRecord};

/// A remote collection of users.
///
/// `RestUserClient` is the HTTP implementation; tests substitute in-memory
/// fakes.
#[async_trait]
pub trait UserResource: Send + Sync {
    /// Read the whole collection, in server order.
    async fn list_users(&self) -> Result<Vec<User>>;

    /// Create a record from `fields` and return the server's echo.
    async fn create_user(&self, fields: &UserFields) -> Result<UserRecord>;

    /// Replace the record `user.id` with `user` and return the server's echo.
    async fn update_user(&self, user: &User) -> Result<UserRecord>;

    /// Delete the record with `id`.
    async fn delete_user(&self, id: UserId) -> Result<()>;
}
