//! HTTP server for leadtrack.
//!
//! Browser-facing surface: server-rendered pages for listing, adding,
//! editing and deleting leads, the aggregated dashboard, and the CSV
//! export download.

mod blocking;
mod handlers;
mod landing;
pub mod page_error;
mod pages;
mod query_types;

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use leadtrack_storage::LeadStore;

/// Shared application state for all HTTP handlers.
///
/// Owns the lead store; wrapped in `Arc` for sharing across handlers.
pub struct AppState {
    /// Persistent lead store
    pub store: Arc<LeadStore>,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(landing::serve_landing))
        .route("/health", get(health))
        .route("/dashboard", get(handlers::dashboard::dashboard))
        .route("/view", get(handlers::leads::view_leads))
        .route("/add", get(handlers::leads::add_form).post(handlers::leads::add_lead))
        .route("/edit/{id}", get(handlers::leads::edit_form).post(handlers::leads::edit_lead))
        .route("/delete/{id}", get(handlers::leads::delete_lead))
        .route("/export", get(handlers::export::export_csv))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
