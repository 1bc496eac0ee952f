/// User domain types
use crate::types::UserId;
use serde::{Deserialize, Serialize};

/// Editable text fields of a user.
///
/// All fields are free-form; a field missing from a remote payload decodes
/// as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserFields {
    /// Display name
    pub name: String,

    /// Email address
    pub email: String,

    /// Login handle
    pub username: String,

    /// Homepage
    pub website: String,
}

impl UserFields {
    /// Create a field set from its four values.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        username: impl Into<String>,
        website: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            username: username.into(),
            website: website.into(),
        }
    }

    /// True when every field is empty or whitespace.
    pub fn is_blank(&self) -> bool {
        [&self.name, &self.email, &self.username, &self.website]
            .iter()
            .all(|value| value.trim().is_empty())
    }
}

/// A user as held in the list.
///
/// `is_new` marks records created in this session whose `id` was generated
/// locally. It is never sent to or read from the remote collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Reconciliation key
    pub id: UserId,

    #[serde(flatten)]
    pub fields: UserFields,

    /// Local-only record (never durably created remotely)
    #[serde(skip)]
    pub is_new: bool,
}

impl User {
    /// A record backed by the remote collection.
    pub fn new(id: UserId, fields: UserFields) -> Self {
        Self {
            id,
            fields,
            is_new: false,
        }
    }

    /// A record created locally with a client-generated id.
    pub fn local(id: UserId, fields: UserFields) -> Self {
        Self {
            id,
            fields,
            is_new: true,
        }
    }

    /// Same id and `is_new` flag, different field values.
    pub fn with_fields(&self, fields: UserFields) -> Self {
        Self {
            id: self.id,
            fields,
            is_new: self.is_new,
        }
    }
}

/// A user object as returned by a create or update call.
///
/// The remote collection may omit or invent the id, so it is optional and
/// never trusted as a reconciliation key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(default)]
    pub id: Option<UserId>,

    #[serde(flatten)]
    pub fields: UserFields,
}

impl UserRecord {
    /// Build a list entry from this payload, keyed by `id`.
    pub fn into_user(self, id: UserId, is_new: bool) -> User {
        User {
            id,
            fields: self.fields,
            is_new,
        }
    }
}
