/// Host configuration
use crate::error::{Result, WebError};
use roster_client::{CollectionConfig, DEFAULT_BASE_URL, DEFAULT_COLLECTION};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Config file read when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "roster.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WebConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_remote")]
    pub remote: RemoteSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

/// Where the user collection lives.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RemoteSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_collection")]
    pub collection: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl WebConfig {
    /// Load configuration from file and environment
    ///
    /// `path` defaults to `roster.toml` in the working directory; a missing
    /// default file is fine, a missing explicit file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        // Override with environment variables, e.g. ROSTER_REMOTE__BASE_URL
        settings = settings.add_source(
            config::Environment::with_prefix("ROSTER")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| WebError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| WebError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.remote.base_url.trim().is_empty() {
            return Err(WebError::Config(
                "remote base URL is required (set ROSTER_REMOTE__BASE_URL)".to_string(),
            ));
        }

        if self.remote.collection.trim_matches('/').is_empty() {
            return Err(WebError::Config(
                "remote collection name cannot be empty".to_string(),
            ));
        }

        if self.remote.timeout_secs == 0 || self.remote.connect_timeout_secs == 0 {
            return Err(WebError::Config(
                "remote timeouts must be at least one second".to_string(),
            ));
        }

        Ok(())
    }

    /// Client settings for the remote collection.
    pub fn collection_config(&self) -> CollectionConfig {
        CollectionConfig::new(self.remote.base_url.clone())
            .with_collection(self.remote.collection.clone())
            .with_timeouts(
                Duration::from_secs(self.remote.timeout_secs),
                Duration::from_secs(self.remote.connect_timeout_secs),
            )
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_remote() -> RemoteSettings {
    RemoteSettings {
        base_url: default_base_url(),
        collection: default_collection(),
        timeout_secs: default_timeout_secs(),
        connect_timeout_secs: default_connect_timeout_secs(),
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_collection() -> String {
    DEFAULT_COLLECTION.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            remote: default_remote(),
        }
    }
}
