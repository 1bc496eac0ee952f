//! Roster Web
//!
//! Browser host for the user list view: serves the rendered page and maps
//! the page's form posts back to view actions.
//!
//! This library exposes the router and state for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod state;

// Re-export commonly used types for convenience
pub use config::WebConfig;
pub use error::{Result, WebError};
pub use state::AppState;

use axum::{
    routing::{get, post},
    Router,
};
use roster_client::RestUserClient;
use roster_view::routes;
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::{DefaultMakeSpan, TraceLayer};

/// Build state backed by the configured remote collection.
pub fn build_state(config: &WebConfig) -> Result<AppState> {
    let client = RestUserClient::new(config.collection_config())?;
    tracing::info!(collection = %client.collection_url(), "Using remote user collection");
    Ok(AppState::new(Arc::new(client)))
}

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(api::page::index))
        .route(routes::SUBMIT, post(api::actions::submit))
        .route(routes::CANCEL, post(api::actions::cancel_edit))
        .route("/users/:id/edit", post(api::actions::start_edit))
        .route("/users/:id/delete", post(api::actions::delete))
        .route("/health", get(api::health::health))
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
        .with_state(app_state)
}

/// Serve the page until the process is stopped.
///
/// The initial read of the collection starts in the background as soon as
/// the listener is bound; the page shows a loading indicator until it
/// settles.
pub async fn serve(config: WebConfig) -> Result<()> {
    let app_state = build_state(&config)?;

    let host: std::net::IpAddr = config
        .server
        .host
        .parse()
        .map_err(|e| WebError::Config(format!("invalid host {}: {}", config.server.host, e)))?;
    let addr = SocketAddr::from((host, config.server.port));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{}", addr);

    let mounting = app_state.clone();
    tokio::spawn(async move { mounting.mount().await });

    axum::serve(listener, create_router(app_state)).await?;
    Ok(())
}
