//! Remote synchronization
//!
//! Every remote call the view makes is a [`SyncCommand`]. Running a command
//! against a [`UserResource`] is the only await point; it yields a
//! [`SyncOutcome`] that the view applies synchronously. Outcomes are applied
//! in the order they are produced, which need not match the order commands
//! were issued.

use roster_client::{ClientError, Result, UserResource};
use roster_core::{User, UserFields, UserId, UserRecord};
use tracing::debug;

/// A remote call requested by the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncCommand {
    /// Read the whole collection
    FetchAll,

    /// Create a record; `local_id` becomes its key in the list
    Create { local_id: UserId, fields: UserFields },

    /// Replace a server-backed record
    Update { user: User },

    /// Delete a record (local-only records included)
    Delete { id: UserId },
}

/// The settled result of a [`SyncCommand`].
#[derive(Debug)]
pub enum SyncOutcome {
    Fetched(Result<Vec<User>>),
    Created {
        local_id: UserId,
        result: Result<UserRecord>,
    },
    Updated {
        id: UserId,
        result: Result<UserRecord>,
    },
    Deleted {
        id: UserId,
        result: Result<()>,
    },
}

impl SyncCommand {
    /// Issue the call and wait for it to settle.
    pub async fn run<R>(self, resource: &R) -> SyncOutcome
    where
        R: UserResource + ?Sized,
    {
        debug!(command = ?self, "Running sync command");

        match self {
            SyncCommand::FetchAll => SyncOutcome::Fetched(resource.list_users().await),
            SyncCommand::Create { local_id, fields } => SyncOutcome::Created {
                local_id,
                result: resource.create_user(&fields).await,
            },
            SyncCommand::Update { user } => SyncOutcome::Updated {
                id: user.id,
                result: resource.update_user(&user).await,
            },
            SyncCommand::Delete { id } => SyncOutcome::Deleted {
                id,
                result: resource.delete_user(id).await,
            },
        }
    }
}

impl SyncOutcome {
    /// The network failure carried by this outcome, if any.
    pub fn failure(&self) -> Option<&ClientError> {
        match self {
            SyncOutcome::Fetched(result) => result.as_ref().err(),
            SyncOutcome::Created { result, .. } | SyncOutcome::Updated { result, .. } => {
                result.as_ref().err()
            }
            SyncOutcome::Deleted { result, .. } => result.as_ref().err(),
        }
    }
}
