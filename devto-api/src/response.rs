//! Error response decoding.
//!
//! Failed DEV API calls answer with a body of the form
//! ```json
//! { "error": "not found", "status": 404 }
//! ```
//! This module is the only place such a body becomes a [`DevError::Remote`].

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use devto_core::error::DevError;

/// Body of a non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable message.
    pub error: String,
    /// Status code as reported by the server.
    #[serde(deserialize_with = "status_code")]
    pub status: u16,
}

/// Accepts `404` and `404.0`. Fractions, negatives and values past `u16` are rejected.
fn status_code<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u16, D::Error> {
    let number = serde_json::Number::deserialize(deserializer)?;
    let whole = match (number.as_u64(), number.as_f64()) {
        (Some(n), _) => Some(n),
        (None, Some(f)) if f.fract() == 0.0 && (0.0..=f64::from(u16::MAX)).contains(&f) => {
            Some(f as u64)
        }
        _ => None,
    };
    whole
        .and_then(|n| u16::try_from(n).ok())
        .ok_or_else(|| D::Error::custom(format!("invalid status code {number}")))
}

impl From<ErrorBody> for DevError {
    fn from(body: ErrorBody) -> Self {
        DevError::Remote {
            status: body.status,
            message: body.error,
        }
    }
}

/// Turn the raw body of a non-2xx response into an error.
///
/// A body that is not JSON, or lacks a string `error` or a numeric `status`,
/// yields [`DevError::Decode`] instead of a remote error.
pub fn extract_error(body: &[u8]) -> DevError {
    match serde_json::from_slice::<ErrorBody>(body) {
        Ok(body) => body.into(),
        Err(e) => DevError::Decode(format!(
            "malformed error body ({e}): {}",
            String::from_utf8_lossy(body)
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_formed_error_body() {
        let err = extract_error(br#"{"error":"not found","status":404}"#);
        match err {
            DevError::Remote { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "not found");
            }
            other => panic!("expected remote error, got {other:?}"),
        }
    }

    #[test]
    fn test_extra_fields_ignored() {
        let err = extract_error(br#"{"error":"unauthorized","status":401,"hint":"check key"}"#);
        assert_eq!(err.remote_status(), Some(401));
    }

    #[test]
    fn test_missing_status_is_decode_error() {
        let err = extract_error(br#"{"error":"boom"}"#);
        assert!(matches!(err, DevError::Decode(_)));
    }

    #[test]
    fn test_mistyped_field_is_decode_error() {
        let err = extract_error(br#"{"error":"boom","status":"500"}"#);
        assert!(matches!(err, DevError::Decode(_)));
        let err = extract_error(br#"{"error":42,"status":500}"#);
        assert!(matches!(err, DevError::Decode(_)));
    }

    #[test]
    fn test_integral_float_status_accepted() {
        let err = extract_error(br#"{"error":"not found","status":404.0}"#);
        assert_eq!(err.remote_status(), Some(404));
    }

    #[test]
    fn test_unusable_status_is_decode_error() {
        for body in [
            r#"{"error":"x","status":404.5}"#,
            r#"{"error":"x","status":-1}"#,
            r#"{"error":"x","status":70000}"#,
            r#"{"error":"x","status":null}"#,
        ] {
            assert!(matches!(extract_error(body.as_bytes()), DevError::Decode(_)), "{body}");
        }
    }

    #[test]
    fn test_non_json_is_decode_error() {
        let err = extract_error(b"<html>502 Bad Gateway</html>");
        match err {
            DevError::Decode(msg) => assert!(msg.contains("502 Bad Gateway")),
            other => panic!("expected decode error, got {other:?}"),
        }
    }
}
