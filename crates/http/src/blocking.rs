//! Helper for running the synchronous store in async handlers.

use tokio::task::spawn_blocking;

use leadtrack_storage::StorageError;

use crate::page_error::PageError;

/// Run a blocking store operation and map its failure modes to
/// `PageError` (not-found → 404, everything else → 500).
pub async fn run_blocking<T, F>(f: F) -> Result<T, PageError>
where
    F: FnOnce() -> Result<T, StorageError> + Send + 'static,
    T: Send + 'static,
{
    spawn_blocking(f)
        .await
        .map_err(|e| PageError::Internal(anyhow::anyhow!("blocking task join error: {e}")))?
        .map_err(PageError::from)
}
