use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use leadtrack_core::{EXPORT_FILE_NAME, render_csv};

use crate::AppState;
use crate::blocking::run_blocking;
use crate::page_error::PageError;

pub async fn export_csv(State(state): State<Arc<AppState>>) -> Result<Response, PageError> {
    let store = state.store.clone();
    let leads = run_blocking(move || store.all_by_id()).await?;
    let body = render_csv(&leads).map_err(|e| PageError::Internal(e.into()))?;
    let headers = [
        (header::CONTENT_TYPE, "text/csv".to_owned()),
        (header::CONTENT_DISPOSITION, format!("attachment; filename=\"{EXPORT_FILE_NAME}\"")),
    ];
    Ok((headers, body).into_response())
}
