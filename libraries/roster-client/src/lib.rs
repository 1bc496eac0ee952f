//! Roster Client
//!
//! HTTP client for a remote REST collection of users.
//!
//! # Operations
//!
//! - **Read**: `GET {base}/{collection}`
//! - **Create**: `POST {base}/{collection}`
//! - **Update**: `PUT {base}/{collection}/{id}` (full replace)
//! - **Delete**: `DELETE {base}/{collection}/{id}`
//!
//! # Example
//!
//! ```ignore
//! use roster_client::{CollectionConfig, RestUserClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = CollectionConfig::new("https://jsonplaceholder.typicode.com");
//!     let client = RestUserClient::new(config)?;
//!
//!     let users = client.list_users().await?;
//!     println!("Found {} users", users.len());
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod resource;
mod types;

pub use client::RestUserClient;
pub use error::{ClientError, Result};
pub use resource::UserResource;
pub use types::{CollectionConfig, DEFAULT_BASE_URL, DEFAULT_COLLECTION};
