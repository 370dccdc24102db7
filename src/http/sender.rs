use async_trait::async_trait;
use reqwest::{Client, Method};
use tracing::debug;

use super::{RequestTemplate, Transport};
use crate::args::DEFAULT_USER_AGENT;
use crate::error::HttpError;

/// `reqwest`-backed transport. One client is built per run and reused for
/// every attempt, so keep-alive connections are shared between iterations.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Builds the shared HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error when the TLS backend or client cannot be initialised.
    pub fn new() -> Result<Self, HttpError> {
        let client = Client::builder()
            .user_agent(DEFAULT_USER_AGENT)
            .build()
            .map_err(|source| HttpError::BuildClientFailed { source })?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, template: &RequestTemplate) -> Result<u16, HttpError> {
        let response = self
            .client
            .request(Method::GET, template.url().clone())
            .headers(template.headers().clone())
            .send()
            .await
            .map_err(|source| HttpError::SendFailed { source })?;

        let status = response.status().as_u16();
        debug!(status, version = ?response.version(), "Response received");
        // Body is never read; dropping the response releases it.
        drop(response);
        Ok(status)
    }
}
