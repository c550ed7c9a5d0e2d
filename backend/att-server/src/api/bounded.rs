use crate::ApiError;

use std::future::Future;
use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;

/// Run a persistence call under the per-call timeout.
///
/// Dropping the returned future (client went away) drops the call with it.
pub async fn bounded<T, E>(
    timeout: Duration,
    operation: &'static str,
    fut: impl Future<Output = Result<T, E>>,
) -> Result<T, ApiError>
where
    ApiError: From<E>,
{
    match tokio::time::timeout(timeout, fut).await {
        Ok(result) => result.map_err(ApiError::from),
        Err(_) => Err(ApiError::Timeout {
            message: format!("{operation} timed out"),
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}
