use async_trait::async_trait;

use crate::error::AppError;

/// Transport to the TV's JSON API.
///
/// Implementations own session handling (TLS, credentials, timeouts); callers
/// only see paths and JSON bodies.
#[async_trait]
pub trait DeviceConnection: Send + Sync {
    /// GET `path` and return the raw response body.
    async fn get(&self, path: &str) -> Result<Vec<u8>, AppError>;

    /// POST a JSON `body` to `path`, discarding the response body.
    async fn post(&self, path: &str, body: &str) -> Result<(), AppError>;
}
