use std::future::Future;
use std::time::Duration;

use crate::domain::errors::RepositoryError;

pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(5);

/// Runs a repository call, failing with [`RepositoryError::Timeout`] if it
/// does not finish within `limit`.
pub async fn bounded<T, F>(limit: Duration, call: F) -> Result<T, RepositoryError>
where
    F: Future<Output = Result<T, RepositoryError>>,
{
    tokio::time::timeout(limit, call)
        .await
        .map_err(|_| RepositoryError::Timeout)?
}
