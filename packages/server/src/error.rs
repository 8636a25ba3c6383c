//! Mapping from domain errors to HTTP responses.
//!
//! Every error response has the body `{"error": "<message>"}`. Internal
//! failures are logged with their detail and reported with a fixed message.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use safet_auth::AuthError;
use safet_safety::ValidationError;
use safet_server_models::ApiErrorBody;
use thiserror::Error;

/// Message returned for every internal failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Message returned when a request body or query cannot be parsed.
pub const INVALID_BODY_MESSAGE: &str = "Invalid request body";

/// An error returned from a handler.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Caller input was missing or invalid.
    #[error("{0}")]
    BadRequest(String),

    /// Credentials or session were rejected.
    #[error("{0}")]
    Unauthorized(String),

    /// The resource already exists.
    #[error("{0}")]
    Conflict(String),

    /// Something unexpected failed. The detail is logged, never returned.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            Self::BadRequest(m) | Self::Unauthorized(m) | Self::Conflict(m) => m.clone(),
            Self::Internal(detail) => {
                log::error!("Internal error: {detail}");
                INTERNAL_ERROR_MESSAGE.to_string()
            }
        };

        HttpResponse::build(self.status_code()).json(ApiErrorBody { error: message })
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::BadRequest(e.to_string())
    }
}

impl From<AuthError> for ApiError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::MissingSignupFields
            | AuthError::MissingLoginFields
            | AuthError::PasswordTooShort => Self::BadRequest(e.to_string()),
            AuthError::InvalidCredentials | AuthError::NotAuthenticated => {
                Self::Unauthorized(e.to_string())
            }
            AuthError::EmailTaken => Self::Conflict(e.to_string()),
            AuthError::Store(detail) => Self::Internal(detail),
        }
    }
}
