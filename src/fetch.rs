use crate::error::{Error, Result};
use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// A source of raw image bytes.
///
/// The pipeline only needs the encoded bytes behind a URL; implementations decide how to get them.
pub trait Fetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

/// Fetches over HTTP(S) with a single blocking GET request.
///
/// There is no retry. Any network error, timeout or non-2xx status is returned as is.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder().timeout(timeout).build()?;

        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        tracing::debug!(url = %url, "Fetching image");

        let response = self.client.get(url).send()?;
        let status = response.status();

        if !status.is_success() {
            tracing::warn!(url = %url, status = %status, "Image request failed");
            return Err(Error::Status {
                url: url.to_string(),
                status,
            });
        }

        let bytes = response.bytes()?;
        tracing::debug!(url = %url, status = %status, size = bytes.len(), "Fetched image");

        Ok(bytes.to_vec())
    }
}
