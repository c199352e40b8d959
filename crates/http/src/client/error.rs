//! Client error types

use thiserror::Error;

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or request error
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error status
    #[error("Server error {status}: {message}")]
    ServerError { status: u16, message: String },

    /// Authentication failed
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Bad request
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Forbidden
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Create error from HTTP status code
    pub fn from_status(status: reqwest::StatusCode, message: String) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(message),
            401 => Self::AuthenticationFailed(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            _ => Self::ServerError {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// True when the server has invalidated the session.
    ///
    /// A 401 always means it. A 403 is ambiguous (it also covers plain
    /// permission denials), so it only counts when the server's message
    /// mentions the session.
    pub fn is_session_invalid(&self) -> bool {
        match self {
            Self::AuthenticationFailed(_) => true,
            Self::Forbidden(message) => message.to_ascii_lowercase().contains("session"),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn unauthorized_is_session_invalid() {
        let error = ClientError::from_status(StatusCode::UNAUTHORIZED, "Unauthorized".into());
        assert!(error.is_session_invalid());
    }

    #[test]
    fn forbidden_needs_a_session_message() {
        let revoked = ClientError::from_status(
            StatusCode::FORBIDDEN,
            "{\"message\":\"Session terminated\"}".into(),
        );
        assert!(revoked.is_session_invalid());

        let denied = ClientError::from_status(
            StatusCode::FORBIDDEN,
            "{\"message\":\"Doctors only\"}".into(),
        );
        assert!(!denied.is_session_invalid());
    }

    #[test]
    fn other_statuses_pass_through() {
        let error =
            ClientError::from_status(StatusCode::INTERNAL_SERVER_ERROR, "session crashed".into());
        assert!(!error.is_session_invalid());
        assert!(matches!(error, ClientError::ServerError { status: 500, .. }));
    }
}
