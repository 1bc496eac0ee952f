//! Shared fixtures for view tests.

#![allow(dead_code)]

use async_trait::async_trait;
use roster_client::{ClientError, Result, UserResource};
use roster_core::{User, UserFields, UserId, UserRecord};
use std::sync::Mutex;

/// A call received by [`FakeResource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    Create(UserFields),
    Update(User),
    Delete(UserId),
}

/// In-memory collection that records calls and can be told to fail.
#[derive(Default)]
pub struct FakeResource {
    users: Vec<User>,
    failing: Mutex<Vec<&'static str>>,
    update_reply: Mutex<Option<UserFields>>,
    calls: Mutex<Vec<Call>>,
}

impl FakeResource {
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users,
            ..Self::default()
        }
    }

    /// Make every later call of `op` ("list", "create", "update", "delete") fail.
    pub fn fail(&self, op: &'static str) {
        self.failing.lock().unwrap().push(op);
    }

    /// Answer updates with these fields instead of echoing the request.
    pub fn reply_to_updates_with(&self, fields: UserFields) {
        *self.update_reply.lock().unwrap() = Some(fields);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call, op: &'static str) -> Result<()> {
        self.calls.lock().unwrap().push(call);
        if self.failing.lock().unwrap().contains(&op) {
            return Err(ClientError::ServerError {
                status: 500,
                message: format!("{} failed", op),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl UserResource for FakeResource {
    async fn list_users(&self) -> Result<Vec<User>> {
        self.record(Call::List, "list")?;
        Ok(self.users.clone())
    }

    async fn create_user(&self, fields: &UserFields) -> Result<UserRecord> {
        self.record(Call::Create(fields.clone()), "create")?;
        Ok(UserRecord {
            id: Some(UserId::new(11)),
            fields: fields.clone(),
        })
    }

    async fn update_user(&self, user: &User) -> Result<UserRecord> {
        self.record(Call::Update(user.clone()), "update")?;
        let fields = self
            .update_reply
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| user.fields.clone());
        Ok(UserRecord {
            id: Some(user.id),
            fields,
        })
    }

    async fn delete_user(&self, id: UserId) -> Result<()> {
        self.record(Call::Delete(id), "delete")
    }
}

pub fn user(id: i64, name: &str, email: &str) -> User {
    User::new(
        UserId::new(id),
        UserFields::new(name, email, name.to_lowercase(), format!("{}.dev", name.to_lowercase())),
    )
}

pub fn sample_users() -> Vec<User> {
    vec![
        user(1, "Leanne", "Sincere@april.biz"),
        user(2, "Ervin", "Shanna@melissa.tv"),
        user(3, "Clementine", "Nathan@yesenia.net"),
    ]
}
