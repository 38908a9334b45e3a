//! Error types for responder chains.

use derive_more::{Display, Error, From};
use http::{Method, StatusCode};
use url::Url;

// ============================================================================
// Status Error
// ============================================================================

/// Details of a response rejected because of its status code.
///
/// Carries what is needed to diagnose the failure: the originating request
/// (when the transport recorded it) and the received status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusError {
    method: Option<Method>,
    url: Option<Url>,
    status: StatusCode,
    status_line: String,
}

impl StatusError {
    /// Creates a new status error.
    #[must_use]
    pub fn new(
        method: Option<Method>,
        url: Option<Url>,
        status: StatusCode,
        status_line: impl Into<String>,
    ) -> Self {
        Self {
            method,
            url,
            status,
            status_line: status_line.into(),
        }
    }

    /// Method of the originating request, if known.
    #[must_use]
    pub const fn method(&self) -> Option<&Method> {
        self.method.as_ref()
    }

    /// URL of the originating request, if known.
    #[must_use]
    pub const fn url(&self) -> Option<&Url> {
        self.url.as_ref()
    }

    /// Received status code.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Received status line, e.g. `404 Not Found`.
    #[must_use]
    pub fn status_line(&self) -> &str {
        &self.status_line
    }
}

impl std::fmt::Display for StatusError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.method, &self.url) {
            (Some(method), Some(url)) => write!(f, "{method} {url}")?,
            (Some(method), None) => write!(f, "{method} <unknown url>")?,
            (None, Some(url)) => write!(f, "<unknown method> {url}")?,
            (None, None) => write!(f, "request")?,
        }
        write!(f, " failed with {}", self.status_line)
    }
}

// ============================================================================
// Error Type
// ============================================================================

/// Main error type for responder chains.
#[derive(Debug, Display, Error, From)]
pub enum Error {
    /// The response status code is not one of the accepted codes.
    #[display("unexpected status: {_0}")]
    #[from(skip)]
    UnexpectedStatus(#[error(not(source))] StatusError),

    /// The response body is not a valid JSON document for the target type.
    #[display("JSON decoding error at '{path}': {message} (payload: \"{payload}\")")]
    #[from(skip)]
    JsonDecode {
        /// JSON path to the error (e.g., "user.address.city").
        path: String,
        /// Error message.
        message: String,
        /// Raw body text consumed before the failure.
        payload: String,
    },

    /// I/O error while handling the response body.
    #[display("I/O error: {_0}")]
    #[from]
    Io(std::io::Error),

    /// Invalid header name or value supplied to a response builder.
    #[display("invalid header: {_0}")]
    #[from(skip)]
    InvalidHeader(#[error(not(source))] String),

    /// Error raised by a caller-provided responder or decorator.
    #[display("{_0}")]
    #[from(skip)]
    Custom(#[error(not(source))] String),
}

/// Result type alias using [`crate::Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an unexpected status error.
    #[must_use]
    pub const fn unexpected_status(details: StatusError) -> Self {
        Self::UnexpectedStatus(details)
    }

    /// Create a JSON decoding error with path context and the offending payload.
    #[must_use]
    pub fn json_decode(
        path: impl Into<String>,
        message: impl Into<String>,
        payload: impl Into<String>,
    ) -> Self {
        Self::JsonDecode {
            path: path.into(),
            message: message.into(),
            payload: payload.into(),
        }
    }

    /// Create an invalid header error.
    #[must_use]
    pub fn invalid_header(message: impl Into<String>) -> Self {
        Self::InvalidHeader(message.into())
    }

    /// Create a custom error.
    #[must_use]
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom(message.into())
    }

    /// Returns `true` if this is an unexpected status error.
    #[must_use]
    pub const fn is_unexpected_status(&self) -> bool {
        matches!(self, Self::UnexpectedStatus(_))
    }

    /// Returns `true` if this is a JSON decoding error.
    #[must_use]
    pub const fn is_json_decode(&self) -> bool {
        matches!(self, Self::JsonDecode { .. })
    }

    /// Returns the status code if this is an unexpected status error.
    #[must_use]
    pub const fn status(&self) -> Option<StatusCode> {
        match self {
            Self::UnexpectedStatus(details) => Some(details.status()),
            _ => None,
        }
    }

    /// Returns the raw payload if this is a JSON decoding error.
    #[must_use]
    pub fn payload(&self) -> Option<&str> {
        match self {
            Self::JsonDecode { payload, .. } => Some(payload),
            _ => None,
        }
    }
}
