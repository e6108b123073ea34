// src/error.rs

use std::fmt;

/// Global Application Error Enum.
/// Every fallible operation of the client returns this type.
#[derive(Debug)]
pub enum AppError {
    // Endpoint unreachable, timeout, broken connection
    Network(String),

    // Server answered with a non-2xx status. `body` is the JSON payload, if any.
    Status {
        status: u16,
        message: String,
        body: Option<serde_json::Value>,
    },

    // Body was not the JSON we expected
    Decode(String),

    // Caller input rejected before any request was sent
    Validation(String),

    // Missing identity or 401
    AuthError(String),

    // Operation not allowed in the current quiz phase
    InvalidState(String),

    // Share gate refused the contribution
    InsufficientPoints { required: i64, current: i64 },

    Io(String),

    Config(String),
}

impl AppError {
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401) || matches!(self, AppError::AuthError(_))
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(msg) => write!(f, "network error: {}", msg),
            AppError::Status { status, message, .. } => write!(f, "API error {}: {}", status, message),
            AppError::Decode(msg) => write!(f, "unexpected response: {}", msg),
            AppError::Validation(msg) => write!(f, "{}", msg),
            AppError::AuthError(msg) => write!(f, "authentication required: {}", msg),
            AppError::InvalidState(msg) => write!(f, "{}", msg),
            AppError::InsufficientPoints { required, current } => write!(
                f,
                "you need {} points to share, current points: {}",
                required, current
            ),
            AppError::Io(msg) => write!(f, "I/O error: {}", msg),
            AppError::Config(msg) => write!(f, "configuration error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Converts `reqwest::Error` into `AppError`.
/// Status errors keep their code so callers can branch on 404/401.
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => AppError::Status {
                status: status.as_u16(),
                message: err.to_string(),
                body: None,
            },
            None if err.is_decode() => AppError::Decode(err.to_string()),
            None => AppError::Network(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decode(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

impl From<url::ParseError> for AppError {
    fn from(err: url::ParseError) -> Self {
        AppError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        let not_found = AppError::Status { status: 404, message: "missing".into(), body: None };
        assert!(not_found.is_not_found());
        assert!(!not_found.is_unauthorized());

        let unauthorized = AppError::Status { status: 401, message: "nope".into(), body: None };
        assert!(unauthorized.is_unauthorized());
        assert!(AppError::AuthError("login first".into()).is_unauthorized());
        assert_eq!(AppError::Network("down".into()).status(), None);
    }

    #[test]
    fn test_display_insufficient_points() {
        let err = AppError::InsufficientPoints { required: 100, current: 40 };
        assert_eq!(err.to_string(), "you need 100 points to share, current points: 40");
    }
}
