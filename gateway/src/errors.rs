//! Error types for outbound HTTP callouts
//!
//! Transport failures are recovered locally by the dispatcher and surfaced to
//! callers as a tagged error instead of an in-band sentinel body.

use std::fmt;

/// Transport-level failure of an outbound callout
#[derive(Debug)]
pub enum HttpError {
    /// Connection to the endpoint failed
    ConnectionFailed { host: String, reason: String },

    /// Request timed out
    Timeout { host: String, operation: String },

    /// Response could not be read or was malformed
    InvalidResponse { host: String, reason: String },
}

impl HttpError {
    /// Classify a reqwest transport error for a given endpoint and operation.
    pub fn from_reqwest(host: &str, operation: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            HttpError::Timeout {
                host: host.to_string(),
                operation: operation.to_string(),
            }
        } else if err.is_connect() {
            HttpError::ConnectionFailed {
                host: host.to_string(),
                reason: err.to_string(),
            }
        } else {
            HttpError::InvalidResponse {
                host: host.to_string(),
                reason: err.to_string(),
            }
        }
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpError::ConnectionFailed { host, reason } => {
                write!(f, "Connection to {} failed: {}", host, reason)
            }
            HttpError::Timeout { host, operation } => {
                write!(f, "Timeout while {} on {}", operation, host)
            }
            HttpError::InvalidResponse { host, reason } => {
                write!(f, "Invalid response from {}: {}", host, reason)
            }
        }
    }
}

impl std::error::Error for HttpError {}
