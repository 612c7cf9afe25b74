//! Typed page error for HTTP handlers.
//!
//! Converts storage errors into proper HTTP responses. Handlers return
//! `Result<Html<String>, PageError>` instead of losing error context
//! with bare `StatusCode`.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use leadtrack_storage::StorageError;

use crate::pages;

/// Page error with HTTP status code and rendered body.
///
/// `Internal` logs the real error server-side and returns a static page
/// to the client, so no error detail leaks.
#[derive(Debug)]
pub enum PageError {
    /// 404 Not Found — the requested lead doesn't exist.
    NotFound(String),
    /// 500 Internal Server Error — unexpected failure. Details logged.
    Internal(anyhow::Error),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Html(pages::render_not_found(&msg))).into_response()
            },
            Self::Internal(err) => {
                tracing::error!(error = ?err, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, Html(pages::render_server_error()))
                    .into_response()
            },
        }
    }
}

impl From<StorageError> for PageError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound { entity, id } => Self::NotFound(format!("{entity} {id}")),
            other => Self::Internal(other.into()),
        }
    }
}

impl From<anyhow::Error> for PageError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err)
    }
}
