//! HTTP transport
//!
//! Thin authenticated request layer over `reqwest`'s blocking client. Every
//! request carries a Basic Authorization header and a JSON content type, and
//! runs under a fixed timeout. There are no retries: any failure surfaces to
//! the caller as-is and the operation is over.

use std::time::Duration;

use thiserror::Error;

/// Fixed request timeout in seconds
pub const REQUEST_TIMEOUT: u64 = 15;

/// Errors from the HTTP layer
#[derive(Error, Debug)]
pub enum TransportError {
    /// Server answered with a non-success status
    #[error("HTTP error: status {0}")]
    Http(u16),

    /// Request exceeded the fixed timeout
    #[error("request timed out after {}s", REQUEST_TIMEOUT)]
    Timeout,

    /// Connection or URL level failure
    #[error("network error: {0}")]
    Network(String),
}

impl TransportError {
    fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else {
            TransportError::Network(err.to_string())
        }
    }
}

/// Authenticated request/response primitive
///
/// Abstracted as a trait so the conflict resolver and orchestrator can be
/// exercised against a scripted fake with call recording.
pub trait Transport {
    /// Fetch `url`, returning the raw response body
    fn get(&self, url: &str, token: &str) -> Result<Vec<u8>, TransportError>;

    /// Send `body` to `url`, returning the raw response body
    fn put(&self, url: &str, token: &str, body: &str) -> Result<Vec<u8>, TransportError>;
}

/// Production transport over `reqwest::blocking`
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, TransportError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT))
            .build()
            .map_err(TransportError::from_reqwest)?;
        Ok(Self { client })
    }

    fn execute(
        &self,
        request: reqwest::blocking::RequestBuilder,
        token: &str,
    ) -> Result<Vec<u8>, TransportError> {
        let response = request
            .header("Authorization", format!("Basic {}", token))
            .header("Content-Type", "application/json")
            .send()
            .map_err(TransportError::from_reqwest)?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Http(status.as_u16()));
        }

        let bytes = response.bytes().map_err(TransportError::from_reqwest)?;
        Ok(bytes.to_vec())
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str, token: &str) -> Result<Vec<u8>, TransportError> {
        self.execute(self.client.get(url), token)
    }

    fn put(&self, url: &str, token: &str, body: &str) -> Result<Vec<u8>, TransportError> {
        // JSONv2 update endpoints take the new value in a POST body
        self.execute(self.client.post(url).body(body.to_string()), token)
    }
}
