//! Error handling for the docharvest library.
//!
//! Two layers of errors live here. [`Error`] covers setup failures that stop
//! an operation before it starts (an HTTP client that cannot be built, a
//! template that cannot be parsed). [`Failure`] describes why a single item
//! of a run was abandoned; it is recorded in the item's summary and never
//! aborts the rest of the run.

use reqwest::StatusCode;
use std::io;
use thiserror::Error;

/// Errors that can happen when using docharvest.
#[derive(Error, Debug)]
pub enum Error {
    /// Error from an underlying system.
    #[error("Internal error: {0}")]
    Internal(String),

    /// Error from the underlying URL parser or the expected URL format.
    ///
    /// Returned when a URL cannot be parsed, is not absolute, or does not
    /// use the http or https scheme.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// I/O Error.
    #[error("I/O error")]
    IOError {
        #[from]
        source: io::Error,
    },

    /// Error from the Reqwest library.
    #[error("Reqwest Error")]
    Reqwest {
        #[from]
        source: reqwest::Error,
    },
}

/// Result type alias for operations that can fail with a docharvest error.
pub type Result<T> = std::result::Result<T, Error>;

/// Reason a single download was abandoned.
///
/// No variant is retried and none is escalated: the item is logged, its
/// summary records the failure, and the run moves on to the next item.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// The request could not be sent or the body could not be read.
    #[error("transport error: {0}")]
    Transport(String),

    /// The server answered with something other than `200 OK`.
    #[error("unexpected HTTP status {0}")]
    HttpStatus(StatusCode),

    /// The `Content-Type` header did not contain the expected MIME type.
    #[error("invalid content type {found:?} (expected {expected})")]
    ContentType {
        expected: &'static str,
        found: String,
    },

    /// The server answered `200 OK` with an empty body.
    #[error("downloaded 0 bytes; not creating file")]
    EmptyBody,

    /// The file could not be created or written.
    #[error("I/O error: {0}")]
    Io(String),

    /// The candidate could not be turned into an absolute http(s) URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

impl From<io::Error> for Failure {
    fn from(e: io::Error) -> Self {
        Failure::Io(e.to_string())
    }
}

impl From<reqwest_middleware::Error> for Failure {
    fn from(e: reqwest_middleware::Error) -> Self {
        Failure::Transport(e.to_string())
    }
}

impl From<reqwest::Error> for Failure {
    fn from(e: reqwest::Error) -> Self {
        Failure::Transport(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_display() {
        assert_eq!(
            Failure::HttpStatus(StatusCode::NOT_FOUND).to_string(),
            "unexpected HTTP status 404 Not Found"
        );
        assert_eq!(
            Failure::ContentType {
                expected: "application/pdf",
                found: "text/html".into(),
            }
            .to_string(),
            "invalid content type \"text/html\" (expected application/pdf)"
        );
    }

    #[test]
    fn test_failure_from_io() {
        let e = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        assert_eq!(Failure::from(e), Failure::Io("denied".into()));
    }
}
