/// Health check route
use crate::state::AppState;
use axum::{extract::State, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `loading` until the initial collection read settles, then `ok`
    pub status: &'static str,
    pub users: usize,
    pub version: &'static str,
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let (loaded, users) = state.summary().await;
    Json(HealthResponse {
        status: if loaded { "ok" } else { "loading" },
        users,
        version: env!("CARGO_PKG_VERSION"),
    })
}
