use reqwest::Url;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::args::HeaderMapping;
use crate::error::HttpError;

const SUPPORTED_SCHEMES: [&str; 2] = ["http", "https"];

/// The single GET request a probe run sends over and over.
///
/// Built once during setup; the loop only ever borrows it.
#[derive(Debug, Clone)]
pub struct RequestTemplate {
    url: Url,
    headers: HeaderMap,
}

impl RequestTemplate {
    /// Builds a GET template for `raw_url`.
    ///
    /// # Errors
    ///
    /// Returns an error when the URL does not parse or its scheme is not
    /// http/https.
    pub fn get(raw_url: &str) -> Result<Self, HttpError> {
        let url = Url::parse(raw_url).map_err(|source| HttpError::InvalidUrl {
            url: raw_url.to_owned(),
            source,
        })?;
        if !SUPPORTED_SCHEMES.contains(&url.scheme()) {
            return Err(HttpError::UnsupportedScheme {
                url: raw_url.to_owned(),
                scheme: url.scheme().to_owned(),
            });
        }
        Ok(Self {
            url,
            headers: HeaderMap::new(),
        })
    }

    /// Attaches every header in `headers`, replacing any existing value
    /// stored under the same (case-insensitive) name.
    ///
    /// # Errors
    ///
    /// Returns an error when a name or value cannot be encoded as an HTTP
    /// header.
    pub fn with_headers(mut self, headers: &HeaderMapping) -> Result<Self, HttpError> {
        for (key, value) in headers {
            let name = HeaderName::from_bytes(key.as_bytes()).map_err(|source| {
                HttpError::InvalidHeaderName {
                    header: key.clone(),
                    source,
                }
            })?;
            let value =
                HeaderValue::from_str(value).map_err(|source| HttpError::InvalidHeaderValue {
                    header: key.clone(),
                    source,
                })?;
            self.headers.insert(name, value);
        }
        Ok(self)
    }

    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    #[must_use]
    pub const fn headers(&self) -> &HeaderMap {
        &self.headers
    }
}
