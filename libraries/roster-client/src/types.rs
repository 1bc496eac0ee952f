//! Connection settings for the remote collection.

use std::time::Duration;

/// Public demo API used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Collection path segment under the base URL.
pub const DEFAULT_COLLECTION: &str = "users";

/// Configuration for connecting to a user collection.
#[derive(Debug, Clone)]
pub struct CollectionConfig {
    /// Base URL of the API (e.g., "https://jsonplaceholder.typicode.com")
    pub url: String,
    /// Collection name appended to the base URL
    pub collection: String,
    /// Whole-request timeout
    pub timeout: Duration,
    /// TCP connect timeout
    pub connect_timeout: Duration,
}

impl CollectionConfig {
    /// Create a config for the `users` collection under `url`.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            collection: DEFAULT_COLLECTION.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }

    /// Use a different collection name.
    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }

    /// Override both timeouts.
    pub fn with_timeouts(mut self, timeout: Duration, connect_timeout: Duration) -> Self {
        self.timeout = timeout;
        self.connect_timeout = connect_timeout;
        self
    }
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
