//! Global error types for the DEV API client.
//!
//! Every failure a request can produce is unified into a single `DevError`
//! enum. Resource operations return these unchanged; nothing above the
//! transport core invents new variants.

use thiserror::Error;

/// Convenience type alias for Results using DevError.
pub type DevResult<T> = Result<T, DevError>;

/// Unified error type covering all error categories in the client.
#[derive(Error, Debug)]
pub enum DevError {
    // -- Construction errors --
    /// The client was constructed with an empty API key.
    #[error("invalid credential: api key must not be empty")]
    InvalidCredential,

    // -- Configuration errors --
    /// Failed to load or parse configuration.
    #[error("configuration error: {0}")]
    Config(String),

    // -- Request errors --
    /// A request payload could not be encoded to JSON or a query string.
    #[error("serialization error: {0}")]
    Serialization(String),

    // -- Network errors --
    /// HTTP request failed at the transport level.
    #[error("http error: {0}")]
    Http(String),

    /// HTTP request timed out.
    #[error("request timeout: {0}")]
    Timeout(String),

    // -- Response errors --
    /// The server answered with a non-2xx status and a well-formed error body.
    #[error("{message}: {status}")]
    Remote {
        /// Status code reported in the error body.
        status: u16,
        /// Error message reported in the error body.
        message: String,
    },

    /// A response body was not the JSON shape the caller expected.
    #[error("decode error: {0}")]
    Decode(String),

    // -- Local errors --
    /// A local precondition failed before any request was made.
    #[error("validation error: {0}")]
    Validation(String),

    /// A timestamp did not match the expected wire format.
    #[error("invalid date {input:?}: {reason}")]
    InvalidDate {
        /// The rejected input.
        input: String,
        /// Why parsing failed.
        reason: String,
    },

    /// File system operation failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl DevError {
    /// Status code of a remote error, if this is one.
    pub fn remote_status(&self) -> Option<u16> {
        match self {
            DevError::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for DevError {
    fn from(e: toml::de::Error) -> Self {
        DevError::Config(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_error_display() {
        let err = DevError::Remote {
            status: 404,
            message: "not found".into(),
        };
        assert_eq!(err.to_string(), "not found: 404");
        assert_eq!(err.remote_status(), Some(404));
    }

    #[test]
    fn test_non_remote_has_no_status() {
        let err = DevError::Validation("bad".into());
        assert_eq!(err.remote_status(), None);
        assert_eq!(err.to_string(), "validation error: bad");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: DevError = io.into();
        assert!(matches!(err, DevError::Io(_)));
    }
}
