use async_trait::async_trait;

use super::RequestTemplate;
use crate::error::HttpError;

/// Sends a request template and hands back the response status code.
///
/// Implementations release the response body before returning so nothing
/// from one attempt outlives it.
#[async_trait]
pub trait Transport {
    /// # Errors
    ///
    /// Returns an error when no response was received (connection refused,
    /// DNS failure, timeout, ...).
    async fn send(&self, template: &RequestTemplate) -> Result<u16, HttpError>;
}
