//! The user list view
//!
//! Owns the in-memory list, the form buffers and the current mode. User
//! actions are dispatched synchronously and may request a remote call; the
//! settled call is applied back as a [`SyncOutcome`].
//!
//! ```text
//! Loading ──(collection read settles)──> Viewing
//! Viewing ──StartEdit──> Editing{target}
//! Editing ──Submit (local-only target)──> Viewing
//! Editing ──Submit──> ... update settles ──> Viewing
//! Editing ──CancelEdit──> Viewing
//! ```

use crate::form::{FormField, UserForm};
use crate::ids::LocalIdGenerator;
use crate::render;
use crate::state::ViewMode;
use crate::sync::{SyncCommand, SyncOutcome};
use roster_client::UserResource;
use roster_core::{User, UserId};
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// A user interaction with the rendered view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Text typed into one form input
    Input(FormField, String),

    /// Form submitted: create, or commit the current edit
    Submit,

    /// "Edit" clicked on a row
    StartEdit(UserId),

    /// "Cancel" clicked while editing
    CancelEdit,

    /// "Delete" clicked on a row
    Delete(UserId),
}

/// State of one mounted user list.
#[derive(Debug, Default)]
pub struct UserListView {
    mode: ViewMode,
    users: Vec<User>,
    form: UserForm,
    ids: LocalIdGenerator,
    mounted: bool,
}

impl UserListView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> &ViewMode {
        &self.mode
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn form(&self) -> &UserForm {
        &self.form
    }

    pub fn is_loading(&self) -> bool {
        self.mode.is_loading()
    }

    /// Row currently bound to the form, if any.
    pub fn editing(&self) -> Option<&User> {
        self.mode.editing()
    }

    pub fn find(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Request the initial read of the collection.
    ///
    /// Returns `None` once the view has already been mounted.
    pub fn mount(&mut self) -> Option<SyncCommand> {
        if self.mounted {
            return None;
        }
        self.mounted = true;
        info!("Mounting user list");
        Some(SyncCommand::FetchAll)
    }

    /// Apply a user action and return the remote call it requires, if any.
    pub fn dispatch(&mut self, action: Action) -> Option<SyncCommand> {
        if self.is_loading() {
            debug!(action = ?action, "Ignoring action while loading");
            return None;
        }

        match action {
            Action::Input(field, value) => {
                self.form.set(field, value);
                None
            }
            Action::Submit => self.submit(),
            Action::StartEdit(id) => {
                self.start_edit(id);
                None
            }
            Action::CancelEdit => {
                if self.editing().is_some() {
                    self.finish_edit();
                }
                None
            }
            Action::Delete(id) => {
                debug!(user_id = %id, "Deleting user");
                Some(SyncCommand::Delete { id })
            }
        }
    }

    fn start_edit(&mut self, id: UserId) {
        let Some(target) = self.find(id).cloned() else {
            debug!(user_id = %id, "Edit requested for unknown user");
            return;
        };

        debug!(user_id = %id, "Editing user");
        self.form.fill(target.fields.clone());
        self.mode = ViewMode::Editing { target };
    }

    fn submit(&mut self) -> Option<SyncCommand> {
        let fields = self.form.fields().clone();

        let Some(target) = self.editing().cloned() else {
            if let Some(field) = self.form.missing_required() {
                debug!(field = field.key(), "Ignoring submit with a required input blank");
                return None;
            }

            let users = &self.users;
            let local_id = self.ids.next_id(|id| users.iter().any(|u| u.id == id));
            debug!(local_id = %local_id, "Creating user");
            return Some(SyncCommand::Create { local_id, fields });
        };

        let updated = target.with_fields(fields);

        if updated.is_new {
            // Never created remotely: nothing to update there.
            info!(user_id = %updated.id, "Updated local-only user");
            self.replace_user(updated);
            self.finish_edit();
            return None;
        }

        debug!(user_id = %updated.id, "Committing edit");
        Some(SyncCommand::Update { user: updated })
    }

    /// Apply a settled remote call.
    pub fn apply(&mut self, outcome: SyncOutcome) {
        if let Some(e) = outcome.failure() {
            warn!(error = %e, "Remote user collection call failed");
        }

        match outcome {
            SyncOutcome::Fetched(result) => {
                match result {
                    Ok(users) => {
                        info!(users = users.len(), "Loaded users");
                        self.users = dedupe(users);
                    }
                    Err(_) => self.users.clear(),
                }
                if self.is_loading() {
                    self.mode = ViewMode::Viewing;
                }
            }
            SyncOutcome::Created { local_id, result } => {
                if let Ok(record) = result {
                    let user = record.into_user(local_id, true);
                    info!(user_id = %user.id, "Created user");
                    if !self.replace_user(user.clone()) {
                        self.users.push(user);
                    }
                    // The form now belongs to a row being edited.
                    if self.editing().is_none() {
                        self.form.clear();
                    }
                }
            }
            SyncOutcome::Updated { id, result } => {
                if let Ok(record) = result {
                    info!(user_id = %id, "Updated user");
                    if !self.replace_user(record.into_user(id, false)) {
                        debug!(user_id = %id, "Updated user no longer listed");
                    }
                }
                self.finish_edit();
            }
            SyncOutcome::Deleted { id, .. } => {
                let before = self.users.len();
                self.users.retain(|u| u.id != id);
                if self.users.len() == before {
                    debug!(user_id = %id, "Deleted user was not listed");
                } else {
                    info!(user_id = %id, "Removed user");
                }
            }
        }
    }

    /// Mount and apply the initial read.
    pub async fn load<R>(&mut self, resource: &R)
    where
        R: UserResource + ?Sized,
    {
        if let Some(command) = self.mount() {
            let outcome = command.run(resource).await;
            self.apply(outcome);
        }
    }

    /// Dispatch `action`, run the remote call it needs and apply the result.
    pub async fn perform<R>(&mut self, action: Action, resource: &R)
    where
        R: UserResource + ?Sized,
    {
        if let Some(command) = self.dispatch(action) {
            let outcome = command.run(resource).await;
            self.apply(outcome);
        }
    }

    /// Render the current state as an HTML fragment.
    pub fn render(&self) -> String {
        render::UserListHtml::new(self).to_string()
    }

    fn finish_edit(&mut self) {
        self.mode = ViewMode::Viewing;
        self.form.clear();
    }

    fn replace_user(&mut self, user: User) -> bool {
        match self.users.iter_mut().find(|u| u.id == user.id) {
            Some(slot) => {
                *slot = user;
                true
            }
            None => false,
        }
    }
}

fn dedupe(users: Vec<User>) -> Vec<User> {
    let mut seen = HashSet::with_capacity(users.len());
    let total = users.len();
    let unique: Vec<User> = users.into_iter().filter(|u| seen.insert(u.id)).collect();
    if unique.len() != total {
        warn!(
            dropped = total - unique.len(),
            "Collection contained duplicate ids"
        );
    }
    unique
}
