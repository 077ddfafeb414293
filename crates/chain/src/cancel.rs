//! Cancellable operation scopes.

use std::future::Future;

use tokio_util::sync::CancellationToken;

use crate::{ChainError, ChainResult};

/// Run a chain call inside a cancellation scope.
///
/// If the token is already cancelled the call is never started. If it fires
/// while the call is in flight, the call's future is dropped, which aborts any
/// outstanding request and releases its connection.
pub async fn with_cancel<F, T>(cancel: &CancellationToken, call: F) -> ChainResult<T>
where
    F: Future<Output = ChainResult<T>>,
{
    if cancel.is_cancelled() {
        return Err(ChainError::Cancelled);
    }

    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(ChainError::Cancelled),
        result = call => result,
    }
}
