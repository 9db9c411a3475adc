//! OMDb request errors.

use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single OMDb request.
///
/// A `"Response": "False"` body is not an error; it is decoded normally
/// and interpreted by the caller.
#[derive(Debug, Error)]
#[allow(clippy::module_name_repetitions)]
pub enum OmdbError {
    /// The request did not complete within the configured timeout.
    #[error("request timed out after {0:?}; check your internet connection and try again")]
    Timeout(Duration),

    /// Any other transport failure (DNS, connect, TLS, reset).
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success HTTP status.
    #[error("network response was not ok (HTTP {status}): {body}")]
    Http {
        /// Response status.
        status: StatusCode,
        /// Response body, or a placeholder when it could not be read.
        body: String,
    },

    /// The response body was not the expected JSON shape.
    #[error("failed to decode OMDb response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl OmdbError {
    /// Classifies a reqwest failure, keeping timeouts distinct.
    ///
    /// The URL is stripped first so the API key never ends up in a message.
    pub(crate) fn from_transport(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            return Self::Timeout(timeout);
        }

        let err = err.without_url();
        let mut message = err.to_string();
        let mut source = std::error::Error::source(&err);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        Self::Network(message)
    }

    /// Returns `true` for [`OmdbError::Timeout`].
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }
}
