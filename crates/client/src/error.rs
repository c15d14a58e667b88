//! Error types for the OpenML client.

use serde::Deserialize;

/// Result type for client operations.
pub type OpenMlResult<T> = Result<T, OpenMlError>;

/// Error types that can occur when talking to OpenML.
#[derive(Debug, thiserror::Error)]
pub enum OpenMlError {
    /// OpenML answered with a non-success status.
    #[error("OpenML API Error {status}{}: {message}", code_suffix(.code))]
    Api {
        status: u16,
        /// Upstream error code; `None` when the error body was not JSON.
        code: Option<String>,
        message: String,
    },

    /// No usable response was obtained.
    #[error("{0}")]
    Transport(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl OpenMlError {
    /// Create an API error from a status code and response body.
    ///
    /// OpenML reports failures as `{"error": {"code": "...", "message": "..."}}`.
    /// Bodies that are not JSON are carried verbatim, cut to 200 characters.
    pub fn from_response(status: u16, body: &str) -> Self {
        match serde_json::from_str::<ErrorEnvelope>(body) {
            Ok(envelope) => {
                let detail = envelope.error.unwrap_or_default();
                let code = detail
                    .code
                    .map(code_to_string)
                    .unwrap_or_else(|| "N/A".to_string());
                Self::Api {
                    status,
                    code: Some(code),
                    message: detail
                        .message
                        .unwrap_or_else(|| "No specific error message provided.".to_string()),
                }
            }
            Err(_) => Self::Api {
                status,
                code: None,
                message: truncate_chars(body, 200),
            },
        }
    }

    /// Wrap a failure that happened before any response was received.
    pub fn request(err: &reqwest::Error) -> Self {
        Self::Transport(format!("HTTP Request Error connecting to OpenML: {}", err))
    }

    /// Wrap any other failure, naming its kind.
    pub fn unexpected(kind: &str, err: impl std::fmt::Display) -> Self {
        Self::Transport(format!("An unexpected error occurred: {} - {}", kind, err))
    }

    /// HTTP status for upstream errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    error: Option<ErrorDetail>,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    code: Option<serde_json::Value>,
    #[serde(default)]
    message: Option<String>,
}

fn code_suffix(code: &Option<String>) -> String {
    code.as_ref()
        .map(|c| format!(" (Code: {})", c))
        .unwrap_or_default()
}

// Codes arrive both as strings ("111") and as numbers (111).
fn code_to_string(code: serde_json::Value) -> String {
    match code {
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    }
}

/// Keep at most `max` characters of `text`.
pub(crate) fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_response_with_error_envelope() {
        let err = OpenMlError::from_response(
            404,
            r#"{"error":{"code":"111","message":"Unknown dataset"}}"#,
        );

        assert_eq!(err.status(), Some(404));
        assert_eq!(
            err.to_string(),
            "OpenML API Error 404 (Code: 111): Unknown dataset"
        );
    }

    #[test]
    fn test_from_response_numeric_code() {
        let err = OpenMlError::from_response(412, r#"{"error":{"code":372,"message":"No results"}}"#);
        assert_eq!(err.to_string(), "OpenML API Error 412 (Code: 372): No results");
    }

    #[test]
    fn test_from_response_missing_fields() {
        let err = OpenMlError::from_response(500, r#"{"something":"else"}"#);
        assert_eq!(
            err.to_string(),
            "OpenML API Error 500 (Code: N/A): No specific error message provided."
        );
    }

    #[test]
    fn test_from_response_plain_body() {
        let body = "x".repeat(300);
        let err = OpenMlError::from_response(502, &body);

        match &err {
            OpenMlError::Api { code, message, .. } => {
                assert!(code.is_none());
                assert_eq!(message.len(), 200);
            }
            _ => panic!("Expected Api error"),
        }
        assert!(err.to_string().starts_with("OpenML API Error 502: xxx"));
    }

    #[test]
    fn test_unexpected_names_kind() {
        let err = OpenMlError::unexpected("Decode", "bad bytes");
        assert_eq!(err.to_string(), "An unexpected error occurred: Decode - bad bytes");
        assert!(err.status().is_none());
    }

    #[test]
    fn test_truncate_chars_respects_boundaries() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("abc", 10), "abc");
    }
}
