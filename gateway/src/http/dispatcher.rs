//! GET/POST callouts to backend services
//!
//! Built on the per-context [`ConnectionCache`]; every call acquires a cached
//! client, so repeated callouts to the same backend reuse the established
//! connection. Calls block the owning task for the duration of the round
//! trip. POST carries a fixed read timeout; GET does not.

use reqwest::header::{HeaderMap, CONTENT_TYPE};
use tracing::{debug, warn};

use crate::constants::http::POST_READ_TIMEOUT;
use crate::errors::HttpError;
use crate::http::cache::ConnectionCache;
use crate::http::status::reason_phrase;

/// URL scheme for outbound callouts. Backend callouts use TLS; plaintext is
/// for local collaborators and test servers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Https,
    Http,
}

impl Scheme {
    fn as_str(self) -> &'static str {
        match self {
            Scheme::Https => "https",
            Scheme::Http => "http",
        }
    }
}

/// Successful response: the body plus the numeric status the backend sent.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Request dispatcher owned by one execution context.
pub struct HttpDispatcher {
    cache: ConnectionCache,
    scheme: Scheme,
}

impl HttpDispatcher {
    pub fn new() -> Self {
        Self::with_scheme(Scheme::Https)
    }

    pub fn with_scheme(scheme: Scheme) -> Self {
        Self {
            cache: ConnectionCache::new(),
            scheme,
        }
    }

    fn url(&self, host: &str, port: u16, path: &str) -> String {
        format!("{}://{}:{}{}", self.scheme.as_str(), host, port, path)
    }

    /// Issue a GET to the endpoint and return the response body and status.
    ///
    /// Transport failure (connect error, malformed response) is returned as
    /// `Err`; no status code is produced in that case.
    pub async fn get(&mut self, host: &str, port: u16, path: &str) -> Result<HttpResponse, HttpError> {
        let url = self.url(host, port, path);
        let client = self.cache.acquire(host, port);

        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|e| HttpError::from_reqwest(host, "GET", e))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| HttpError::from_reqwest(host, "GET", e))?;

        debug!("GET {} -> {} {}", url, status, reason_phrase(status as i32));
        Ok(HttpResponse { status, body })
    }

    /// Issue a POST with the given body, content type, and extra headers.
    ///
    /// The read timeout is fixed at 10 seconds. Caller-supplied headers are
    /// merged into the request; the content type always wins over a
    /// caller-supplied one. Failures are logged with the underlying
    /// transport error and returned as `Err`.
    pub async fn post(
        &mut self,
        host: &str,
        port: u16,
        path: &str,
        body: String,
        content_type: &str,
        headers: HeaderMap,
    ) -> Result<HttpResponse, HttpError> {
        let url = self.url(host, port, path);
        let client = self.cache.acquire(host, port);

        let response = client
            .post(&url)
            .timeout(POST_READ_TIMEOUT)
            .headers(headers)
            .header(CONTENT_TYPE, content_type)
            .body(body)
            .send()
            .await
            .map_err(|e| {
                let error = HttpError::from_reqwest(host, "POST", e);
                warn!("POST {} failed: {}", url, error);
                error
            })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            let error = HttpError::from_reqwest(host, "POST", e);
            warn!("POST {} failed: {}", url, error);
            error
        })?;

        debug!("POST {} -> {} {}", url, status, reason_phrase(status as i32));
        Ok(HttpResponse { status, body })
    }
}

impl Default for HttpDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
