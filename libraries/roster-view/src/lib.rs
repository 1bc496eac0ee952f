//! Roster View
//!
//! The user list component: an in-memory list of users kept in sync with a
//! remote collection, a create/edit form, and an HTML rendering of both.
//!
//! # Architecture
//!
//! - [`UserListView`] owns the list, the form buffers and a single
//!   [`ViewMode`] (`Loading`, `Viewing`, `Editing`).
//! - User interactions are [`Action`]s. Dispatching one mutates local state
//!   synchronously and may return a [`SyncCommand`].
//! - A command is run against any [`roster_client::UserResource`] and yields a
//!   [`SyncOutcome`], which the view applies. The view is never borrowed
//!   across the network call, so a host may run several commands at once;
//!   outcomes then land in completion order.
//! - Network failures are logged and swallowed. A failed delete still
//!   removes the row.
//!
//! # Example
//!
//! ```ignore
//! use roster_client::{CollectionConfig, RestUserClient};
//! use roster_view::{Action, FormField, UserListView};
//!
//! let client = RestUserClient::new(CollectionConfig::default())?;
//! let mut view = UserListView::new();
//!
//! view.load(&client).await;
//! view.perform(Action::Input(FormField::Name, "Ann".into()), &client).await;
//! view.perform(Action::Submit, &client).await;
//!
//! println!("{}", view.render());
//! ```

#![forbid(unsafe_code)]

pub mod form;
pub mod ids;
pub mod render;
pub mod state;
pub mod sync;
pub mod view;

pub use form::{FormField, UserForm};
pub use ids::LocalIdGenerator;
pub use render::{routes, Escaped, UserListHtml};
pub use state::ViewMode;
pub use sync::{SyncCommand, SyncOutcome};
pub use view::{Action, UserListView};
