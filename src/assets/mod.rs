//! Decorative animation descriptors fetched over HTTP.
//!
//! The dashboard home page decorates itself with animation descriptors
//! fetched from fixed URLs. The fetch is cosmetic: a non-success status
//! or any transport failure degrades to "no animation" and must never
//! abort the caller. Network I/O stays behind the `AnimationSource`
//! trait so view logic and tests never touch the wire.

use std::time::Duration;

use log::warn;
use serde_json::Value;

/// Request timeout for animation fetches
const FETCH_TIMEOUT: Duration = Duration::from_millis(3000);

/// Errors from the fallible inner fetch
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    /// Transport-level failure (connect, timeout, decode)
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("unexpected status: {0}")]
    Status(reqwest::StatusCode),
}

/// Source of decorative animation descriptors
pub trait AnimationSource {
    /// Fetch a JSON animation descriptor, or `None` when unavailable
    fn fetch_animation(&self, url: &str) -> Option<Value>;
}

/// HTTP-backed animation source with a bounded request timeout
#[derive(Debug)]
pub struct HttpAnimationSource {
    client: reqwest::blocking::Client,
}

impl HttpAnimationSource {
    /// Create a source with the default timeout
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed
    pub fn new() -> Result<Self, AssetError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()?;
        Ok(Self { client })
    }

    fn fetch(&self, url: &str) -> Result<Value, AssetError> {
        let response = self.client.get(url).send()?;
        if !response.status().is_success() {
            return Err(AssetError::Status(response.status()));
        }
        Ok(response.json()?)
    }
}

impl AnimationSource for HttpAnimationSource {
    fn fetch_animation(&self, url: &str) -> Option<Value> {
        match self.fetch(url) {
            Ok(descriptor) => Some(descriptor),
            Err(error) => {
                warn!("animation fetch failed for {url}: {error}");
                None
            }
        }
    }
}
