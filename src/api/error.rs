use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Unauthorized - token is invalid or expired")]
    Unauthorized,

    /// The API rejected the request with a structured `detail` message.
    /// The message is safe to show to the user as-is.
    #[error("{0}")]
    Rejected(String),

    #[error("Cannot reach the server")]
    Unreachable,

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Network error: {0}")]
    NetworkError(reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Structured error body returned by the API on 4xx responses
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

impl ApiError {
    /// Truncate a response body to avoid logging excessive data
    fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            body.to_string()
        } else {
            // Cut on a char boundary; byte 500 may fall inside a multibyte
            // character (localized proxy error pages, for example)
            let mut end = MAX_ERROR_BODY_LENGTH;
            while !body.is_char_boundary(end) {
                end -= 1;
            }
            format!(
                "{}... (truncated, {} total bytes)",
                &body[..end],
                body.len()
            )
        }
    }

    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        match status.as_u16() {
            401 => ApiError::Unauthorized,
            400..=499 => {
                // 4xx bodies carry a {"detail": "..."} explanation meant for
                // the user. Anything else is treated as an unexpected response.
                match serde_json::from_str::<ErrorBody>(body) {
                    Ok(ErrorBody {
                        detail: Some(detail),
                    }) if !detail.trim().is_empty() => ApiError::Rejected(detail),
                    _ => ApiError::InvalidResponse(format!(
                        "Status {}: {}",
                        status,
                        Self::truncate_body(body)
                    )),
                }
            }
            500..=599 => ApiError::ServerError(Self::truncate_body(body)),
            _ => ApiError::InvalidResponse(format!(
                "Status {}: {}",
                status,
                Self::truncate_body(body)
            )),
        }
    }

    /// Classify a transport-level reqwest error. Connection and timeout
    /// failures get their own variant so the UI can show a distinct
    /// "cannot connect" message.
    pub fn transport(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            ApiError::Unreachable
        } else {
            ApiError::NetworkError(err)
        }
    }

    /// User-facing message for this error. `Rejected` details are surfaced
    /// verbatim; everything unexpected collapses to a generic fallback.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Unauthorized => "Session expired or invalid. Please log in again.".to_string(),
            ApiError::Rejected(detail) => detail.clone(),
            ApiError::Unreachable => {
                "Cannot connect to the server. Check your internet connection.".to_string()
            }
            ApiError::ServerError(_) | ApiError::NetworkError(_) | ApiError::InvalidResponse(_) => {
                "Something went wrong. Please try again.".to_string()
            }
        }
    }
}
