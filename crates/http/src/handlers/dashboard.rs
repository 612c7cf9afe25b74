use axum::extract::State;
use axum::response::Html;
use std::sync::Arc;

use chrono::Local;
use leadtrack_core::DashboardSummary;

use crate::AppState;
use crate::blocking::run_blocking;
use crate::page_error::PageError;
use crate::pages;

pub async fn dashboard(State(state): State<Arc<AppState>>) -> Result<Html<String>, PageError> {
    let store = state.store.clone();
    let leads = run_blocking(move || store.all_by_created()).await?;
    // "Upcoming" is relative to the server-local calendar date.
    let summary = DashboardSummary::build(&leads, Local::now().date_naive());
    Ok(Html(pages::render_dashboard(&summary, &leads)))
}
