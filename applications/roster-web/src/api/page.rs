/// The user list page
use crate::state::AppState;
use axum::{extract::State, response::Html};

/// Seconds between reloads while the initial read is pending.
const LOADING_REFRESH_SECS: u32 = 1;

/// Wrap a rendered view fragment in a full HTML document.
pub fn document(body: &str, loading: bool) -> String {
    let refresh = if loading {
        format!(
            "<meta http-equiv=\"refresh\" content=\"{}\">\n",
            LOADING_REFRESH_SECS
        )
    } else {
        String::new()
    };

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         {refresh}<title>User List</title>\n</head>\n<body>\n{body}</body>\n</html>\n"
    )
}

/// Render the whole page for the current view state.
pub async fn render_page(state: &AppState) -> String {
    let loading = state.is_loading().await;
    document(&state.render().await, loading)
}

/// GET / - The user list
pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render_page(&state).await)
}
