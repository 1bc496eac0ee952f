//! View modes
//!
//! The view is always in exactly one mode. `Loading` lasts until the first
//! read of the collection settles; afterwards the view toggles between
//! `Viewing` and `Editing`.

use roster_core::User;

/// Mode of a mounted user list view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// Initial read of the collection not settled yet
    #[default]
    Loading,

    /// Table shown, form creates new users
    Viewing,

    /// Form bound to `target`; submitting commits the edit
    Editing {
        /// Row as it was when editing started
        target: User,
    },
}

impl ViewMode {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewMode::Loading)
    }

    /// Row being edited, if any.
    pub fn editing(&self) -> Option<&User> {
        match self {
            ViewMode::Editing { target } => Some(target),
            _ => None,
        }
    }
}

