/// Form posts from the rendered page
use crate::{
    error::{Result, WebError},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    response::Redirect,
    Form,
};
use roster_core::UserId;
use roster_view::{Action, FormField};
use serde::Deserialize;

/// Body of the create/edit form.
#[derive(Debug, Default, Deserialize)]
pub struct SubmitForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub website: String,
}

impl SubmitForm {
    /// The typed values followed by the submit itself.
    fn into_actions(self) -> [Action; 5] {
        [
            Action::Input(FormField::Name, self.name),
            Action::Input(FormField::Email, self.email),
            Action::Input(FormField::Username, self.username),
            Action::Input(FormField::Website, self.website),
            Action::Submit,
        ]
    }
}

fn back_to_list() -> Redirect {
    Redirect::to("/")
}

/// POST /submit
/// Create a user, or commit the edit in progress
pub async fn submit(State(state): State<AppState>, Form(form): Form<SubmitForm>) -> Redirect {
    state.perform_all(form.into_actions()).await;
    back_to_list()
}

/// POST /users/:id/edit
/// Bind the form to a listed user
pub async fn start_edit(
    Path(id): Path<UserId>,
    State(state): State<AppState>,
) -> Result<Redirect> {
    if !state.is_listed(id).await {
        return Err(WebError::NotFound(format!("User {} is not listed", id)));
    }

    state.perform(Action::StartEdit(id)).await;
    Ok(back_to_list())
}

/// POST /users/:id/delete
pub async fn delete(Path(id): Path<UserId>, State(state): State<AppState>) -> Redirect {
    state.perform(Action::Delete(id)).await;
    back_to_list()
}

/// POST /cancel
pub async fn cancel_edit(State(state): State<AppState>) -> Redirect {
    state.perform(Action::CancelEdit).await;
    back_to_list()
}
