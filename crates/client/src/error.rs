use serde::Deserialize;
use thiserror::Error;

/// Errors produced by calls against the backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP 401. The session is cleared once this is final and the user
    /// must log in again.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// HTTP 404. Treated as transient for user-scoped lookups because
    /// the backend's user record can lag right after creation.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Rejected locally before any network call.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The backend answered with a non-success status.
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// The request never completed (connect failure, timeout, ...).
    #[error("Network error: {0}")]
    Network(String),

    /// The response body did not match the expected shape.
    #[error("Unexpected response: {0}")]
    Decode(String),
}

/// Error body the backend attaches to failed requests.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    /// Builds the error for a non-success response, surfacing the
    /// backend's `{"error": ...}` message verbatim when present.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .map(|b| b.error)
            .unwrap_or_else(|_| default_message(status));

        match status {
            401 => ApiError::Unauthorized(message),
            404 => ApiError::NotFound(message),
            400 => ApiError::Validation(message),
            _ => ApiError::Server { status, message },
        }
    }
}

fn default_message(status: u16) -> String {
    match status {
        401 => "Session invalid. Please log in again.".to_string(),
        404 => "Resource not found".to_string(),
        _ => format!("Request failed with status {status}"),
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let messages: Vec<String> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| {
                    e.message
                        .clone()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid value for {field}"))
                })
            })
            .collect();

        ApiError::Validation(messages.join("; "))
    }
}
