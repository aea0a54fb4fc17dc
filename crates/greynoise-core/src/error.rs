use thiserror::Error;

/// Result type alias for GreyNoise operations
pub type Result<T> = std::result::Result<T, GreyNoiseError>;

/// Errors that can occur when using the GreyNoise API
#[derive(Error, Debug)]
pub enum GreyNoiseError {
    /// The API answered with a non-success status
    #[error("API error: {}", request_failure_message(.body))]
    RequestFailure {
        /// HTTP status code
        status: u16,
        /// Decoded error body (a JSON string if the body was not JSON)
        body: serde_json::Value,
    },

    /// HTTP request failed before a response was received
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// JSON parsing/serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid IP address format
    #[error("invalid IP address: {0}")]
    InvalidIp(String),

    /// Invalid URL
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl GreyNoiseError {
    /// Message to show for a failed request.
    ///
    /// Prefers the `error` field of the decoded body and falls back to the
    /// body itself. Other variants use their display text.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::RequestFailure { body, .. } => request_failure_message(body),
            other => other.to_string(),
        }
    }

    /// Returns the HTTP status code if the API answered at all
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::RequestFailure { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if the error is due to authentication
    #[must_use]
    pub const fn is_auth_error(&self) -> bool {
        matches!(self, Self::RequestFailure { status: 401 | 403, .. })
    }

    /// Returns true if the error was raised before any request was sent
    /// because the caller's input was malformed
    #[must_use]
    pub const fn is_validation_error(&self) -> bool {
        matches!(self, Self::InvalidIp(_))
    }
}

fn request_failure_message(body: &serde_json::Value) -> String {
    match body.get("error") {
        Some(serde_json::Value::String(message)) => message.clone(),
        Some(other) => other.to_string(),
        None => match body {
            serde_json::Value::String(text) => text.clone(),
            other => other.to_string(),
        },
    }
}
