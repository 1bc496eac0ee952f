/// Shared application state
use roster_client::UserResource;
use roster_core::UserId;
use roster_view::{Action, UserListView};
use std::sync::Arc;
use tokio::sync::Mutex;

/// The mounted view and the collection it syncs with.
///
/// The view lock is held only while dispatching an action or applying an
/// outcome, never across a remote call. Overlapping browser requests
/// therefore overlap remotely too, and their outcomes are applied in the
/// order the remote calls settle.
#[derive(Clone)]
pub struct AppState {
    view: Arc<Mutex<UserListView>>,
    resource: Arc<dyn UserResource>,
}

impl AppState {
    pub fn new(resource: Arc<dyn UserResource>) -> Self {
        Self {
            view: Arc::new(Mutex::new(UserListView::new())),
            resource,
        }
    }

    /// Run the initial read. Later calls do nothing.
    pub async fn mount(&self) {
        let command = self.view.lock().await.mount();
        if let Some(command) = command {
            let outcome = command.run(self.resource.as_ref()).await;
            self.view.lock().await.apply(outcome);
        }
    }

    /// Dispatch one action and settle the remote call it needs.
    pub async fn perform(&self, action: Action) {
        let command = self.view.lock().await.dispatch(action);
        if let Some(command) = command {
            let outcome = command.run(self.resource.as_ref()).await;
            self.view.lock().await.apply(outcome);
        }
    }

    /// Dispatch several actions in order, settling each before the next.
    pub async fn perform_all(&self, actions: impl IntoIterator<Item = Action>) {
        for action in actions {
            self.perform(action).await;
        }
    }

    pub async fn is_listed(&self, id: UserId) -> bool {
        self.view.lock().await.find(id).is_some()
    }

    pub async fn is_loading(&self) -> bool {
        self.view.lock().await.is_loading()
    }

    /// Whether the initial read has settled, and how many rows are listed.
    pub async fn summary(&self) -> (bool, usize) {
        let view = self.view.lock().await;
        (!view.is_loading(), view.users().len())
    }

    /// Current view as an HTML fragment.
    pub async fn render(&self) -> String {
        self.view.lock().await.render()
    }
}
