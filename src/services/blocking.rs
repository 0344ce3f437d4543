//! Bridge from async handlers to the synchronous stores.

use crate::errors::{AppError, AppResult};

/// Run a store operation on the blocking thread pool.
///
/// Once spawned the operation runs to completion even if the caller is
/// dropped, so an abandoned request never leaves a write half-issued.
pub(crate) async fn run_blocking<T, F>(f: F) -> AppResult<T>
where
    F: FnOnce() -> AppResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| AppError::internal(format!("Store task failed: {}", e)))?
}
