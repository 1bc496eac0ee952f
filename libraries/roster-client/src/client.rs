//! HTTP implementation of the user collection.

use crate::error::{ClientError, Result};
use crate::resource::UserResource;
use crate::types::CollectionConfig;
use async_trait::async_trait;
use reqwest::{Client, Response};
use roster_core::{User, UserFields, UserId, UserRecord};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

/// Client for a REST collection of users.
///
/// # Example
///
/// ```ignore
/// use roster_client::{CollectionConfig, RestUserClient};
/// use roster_core::UserFields;
///
/// let client = RestUserClient::new(CollectionConfig::new("https://jsonplaceholder.typicode.com"))?;
///
/// let created = client
///     .create_user(&UserFields::new("Ann", "a@x.com", "ann", "ann.dev"))
///     .await?;
/// println!("Server echoed {:?}", created.id);
/// ```
#[derive(Debug, Clone)]
pub struct RestUserClient {
    http: Client,
    collection_url: String,
}

impl RestUserClient {
    /// Create a new client with the given configuration.
    pub fn new(config: CollectionConfig) -> Result<Self> {
        if config.url.is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        let url = config.url.trim_end_matches('/').to_string();
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }
        Url::parse(&url).map_err(|e| ClientError::InvalidUrl(format!("{}: {}", url, e)))?;

        let collection = config.collection.trim_matches('/');
        if collection.is_empty() {
            return Err(ClientError::InvalidUrl(
                "collection name cannot be empty".into(),
            ));
        }

        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(format!("Roster/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            collection_url: format!("{}/{}", url, collection),
        })
    }

    /// URL of the collection, e.g. `https://host/users`.
    pub fn collection_url(&self) -> &str {
        &self.collection_url
    }

    fn item_url(&self, id: UserId) -> String {
        format!("{}/{}", self.collection_url, id)
    }

    /// Read the full collection.
    pub async fn list_users(&self) -> Result<Vec<User>> {
        let url = self.collection_url.clone();
        debug!(url = %url, "Fetching user collection");

        let response = self.http.get(&url).send().await.map_err(send_error)?;
        let users: Vec<User> = read_json(response, "user list").await?;

        debug!(users = users.len(), "Fetched user collection");
        Ok(users)
    }

    /// Create a user from `fields`.
    pub async fn create_user(&self, fields: &UserFields) -> Result<UserRecord> {
        let url = self.collection_url.clone();
        debug!(url = %url, name = %fields.name, "Creating user");

        let response = self
            .http
            .post(&url)
            .json(fields)
            .send()
            .await
            .map_err(send_error)?;

        let record: UserRecord = read_json(response, "created user").await?;
        debug!(echoed_id = ?record.id, "User created");
        Ok(record)
    }

    /// Replace the user `user.id` with the full record.
    pub async fn update_user(&self, user: &User) -> Result<UserRecord> {
        let url = self.item_url(user.id);
        debug!(url = %url, user_id = %user.id, "Updating user");

        let response = self
            .http
            .put(&url)
            .json(user)
            .send()
            .await
            .map_err(send_error)?;

        read_json(response, "updated user").await
    }

    /// Delete the user `id`.
    pub async fn delete_user(&self, id: UserId) -> Result<()> {
        let url = self.item_url(id);
        debug!(url = %url, user_id = %id, "Deleting user");

        let response = self.http.delete(&url).send().await.map_err(send_error)?;
        let status = response.status();

        if status.is_success() {
            debug!(user_id = %id, "User deleted");
            Ok(())
        } else if status.as_u16() == 404 {
            // Already gone remotely
            debug!(user_id = %id, "User not found on delete");
            Ok(())
        } else {
            Err(server_error(response).await)
        }
    }
}

#[async_trait]
impl UserResource for RestUserClient {
    async fn list_users(&self) -> Result<Vec<User>> {
        RestUserClient::list_users(self).await
    }

    async fn create_user(&self, fields: &UserFields) -> Result<UserRecord> {
        RestUserClient::create_user(self, fields).await
    }

    async fn update_user(&self, user: &User) -> Result<UserRecord> {
        RestUserClient::update_user(self, user).await
    }

    async fn delete_user(&self, id: UserId) -> Result<()> {
        RestUserClient::delete_user(self, id).await
    }
}

fn send_error(e: reqwest::Error) -> ClientError {
    if e.is_connect() || e.is_timeout() {
        ClientError::ServerUnreachable(e.to_string())
    } else {
        ClientError::Request(e)
    }
}

async fn server_error(response: Response) -> ClientError {
    let status = response.status().as_u16();
    let message = response.text().await.unwrap_or_default();
    ClientError::ServerError { status, message }
}

async fn read_json<T: DeserializeOwned>(response: Response, what: &str) -> Result<T> {
    if !response.status().is_success() {
        return Err(server_error(response).await);
    }

    let body = response.text().await?;
    serde_json::from_str(&body)
        .map_err(|e| ClientError::ParseError(format!("Failed to parse {}: {}", what, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_validation() {
        assert!(RestUserClient::new(CollectionConfig::new("https://example.com")).is_ok());
        assert!(RestUserClient::new(CollectionConfig::new("http://localhost:8080")).is_ok());

        assert!(RestUserClient::new(CollectionConfig::new("")).is_err());
        assert!(RestUserClient::new(CollectionConfig::new("not-a-url")).is_err());
        assert!(RestUserClient::new(CollectionConfig::new("ftp://example.com")).is_err());
    }

    #[test]
    fn test_collection_url() {
        let client = RestUserClient::new(
            CollectionConfig::new("https://example.com//").with_collection("/people/"),
        )
        .unwrap();

        assert_eq!(client.collection_url(), "https://example.com/people");
        assert_eq!(client.item_url(UserId::new(4)), "https://example.com/people/4");
    }

    #[test]
    fn test_empty_collection_rejected() {
        let result =
            RestUserClient::new(CollectionConfig::new("https://example.com").with_collection("/"));
        assert!(matches!(result, Err(ClientError::InvalidUrl(_))));
    }
}
