use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, warn};

pub type Result<T> = std::result::Result<T, ApiError>;

/// Error codes for categorizing errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Routing errors (1xxx)
    RouteNotFound,

    // Authentication errors (2xxx)
    SignatureInvalid,

    // Payload errors (3xxx)
    MalformedPayload,

    // External service errors (8xxx)
    NotifierFailed,

    // Internal errors (9xxx)
    InternalServerError,
}

impl ErrorCode {
    /// Get numeric code
    pub fn code(&self) -> u16 {
        match self {
            ErrorCode::RouteNotFound => 1001,
            ErrorCode::SignatureInvalid => 2001,
            ErrorCode::MalformedPayload => 3001,
            ErrorCode::NotifierFailed => 8001,
            ErrorCode::InternalServerError => 9999,
        }
    }

    /// Get user-friendly message
    pub fn message(&self) -> &'static str {
        match self {
            ErrorCode::RouteNotFound => "Unknown route",
            ErrorCode::SignatureInvalid => "Validation failed",
            ErrorCode::MalformedPayload => "Malformed payload",
            ErrorCode::NotifierFailed => "Notification delivery failed",
            ErrorCode::InternalServerError => "An internal server error occurred",
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No route for path {0}")]
    RouteNotFound(String),

    #[error("Webhook signature verification failed")]
    SignatureInvalid,

    #[error("Malformed payload: {field}")]
    MalformedPayload { field: String },

    #[error("Notifier error: {0}")]
    Notifier(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Helper: required payload field is absent or has the wrong shape
    pub fn malformed(field: impl Into<String>) -> Self {
        ApiError::MalformedPayload {
            field: field.into(),
        }
    }

    /// Get error code
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ApiError::RouteNotFound(_) => ErrorCode::RouteNotFound,
            ApiError::SignatureInvalid => ErrorCode::SignatureInvalid,
            ApiError::MalformedPayload { .. } => ErrorCode::MalformedPayload,
            ApiError::Notifier(_) => ErrorCode::NotifierFailed,
            ApiError::Internal(_) => ErrorCode::InternalServerError,
        }
    }

    /// Get status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::RouteNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::SignatureInvalid => StatusCode::UNAUTHORIZED,
            ApiError::MalformedPayload { .. } => StatusCode::BAD_REQUEST,
            ApiError::Notifier(_) => StatusCode::BAD_GATEWAY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Plain-text body returned to the webhook sender
    pub fn body(&self) -> String {
        match self {
            ApiError::MalformedPayload { field } => {
                format!("{}: {}", self.error_code().message(), field)
            }
            _ => self.error_code().message().to_string(),
        }
    }

    /// Log error with appropriate level.
    ///
    /// The request id comes from the enclosing `request` span opened by the
    /// request logger.
    fn log_error(&self) {
        let code = self.error_code().code();
        match self.status_code() {
            status if status.is_server_error() => {
                error!(
                    code,
                    error = %self,
                    "Server error occurred"
                );
            }
            status if status.is_client_error() => {
                warn!(
                    code,
                    error = %self,
                    "Client error occurred"
                );
            }
            _ => {}
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.log_error();

        (self.status_code(), self.body()).into_response()
    }
}
