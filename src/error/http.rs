use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Failed to create HTTP request: invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Failed to create HTTP request: unsupported scheme '{scheme}' in '{url}'")]
    UnsupportedScheme { url: String, scheme: String },
    #[error("Failed to create HTTP request: invalid header name '{header}': {source}")]
    InvalidHeaderName {
        header: String,
        #[source]
        source: http::header::InvalidHeaderName,
    },
    #[error("Failed to create HTTP request: invalid value for header '{header}': {source}")]
    InvalidHeaderValue {
        header: String,
        #[source]
        source: http::header::InvalidHeaderValue,
    },
    #[error("Failed to build HTTP client: {source}")]
    BuildClientFailed {
        #[source]
        source: reqwest::Error,
    },
    #[error("Failed to send HTTP request: {}", source_chain(.source))]
    SendFailed {
        #[source]
        source: reqwest::Error,
    },
    #[error("Failed to send HTTP request: {message}")]
    Transport { message: String },
}

/// Joins an error with every cause below it; reqwest's own message omits
/// the underlying connect/DNS/timeout reason.
pub(crate) fn source_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut current = err.source();
    while let Some(cause) = current {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        current = cause.source();
    }
    message
}

impl HttpError {
    /// Failures raised while a request was in flight.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(
            self,
            HttpError::SendFailed { .. } | HttpError::Transport { .. }
        )
    }
}
