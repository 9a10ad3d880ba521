//! I/O boundary traits for testability
//!
//! The HTTP transport is abstracted so services can be tested with
//! canned responses instead of a live server.

use std::error::Error as StdError;

use thiserror::Error;

/// Fully read HTTP response.
///
/// The body is drained by the transport before this is returned, so the
/// underlying connection is already released when callers see it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Exactly `200 OK`; other 2xx codes do not count.
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Request could not be completed (DNS, connect, TLS, timeout, body read).
#[derive(Error, Debug)]
#[error("GET {url} failed")]
pub struct TransportError {
    pub url: String,
    #[source]
    pub source: Box<dyn StdError + Send + Sync>,
}

impl TransportError {
    pub fn new(url: impl Into<String>, source: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        Self {
            url: url.into(),
            source: source.into(),
        }
    }
}

/// HTTP transport abstraction.
pub trait HttpClient: Send + Sync {
    /// Send a GET request with the given extra headers and read the whole body.
    fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<HttpResponse, TransportError>;
}

/// Sink for the per-request lines printed in verbose mode.
pub trait RequestTrace: Send + Sync {
    /// Record one completed request.
    fn request(&self, method: &str, url: &str, status: u16);
}

/// Trace sink that discards everything.
#[derive(Debug, Default)]
pub struct NoTrace;

impl RequestTrace for NoTrace {
    fn request(&self, _method: &str, _url: &str, _status: u16) {}
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Blocking reqwest client, created once per run and reused for every request.
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    client: reqwest::blocking::Client,
}

impl ReqwestClient {
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

impl HttpClient for ReqwestClient {
    fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<HttpResponse, TransportError> {
        let mut request = self.client.get(url);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let response = request.send().map_err(|e| TransportError::new(url, e))?;
        let status = response.status().as_u16();
        // text() consumes the response, returning the connection to the pool
        let body = response.text().map_err(|e| TransportError::new(url, e))?;

        Ok(HttpResponse { status, body })
    }
}
