//! Custom error types specific to authentication failures.

use thiserror::Error;

use crate::errors::ApiError;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("missing or invalid session")]
    InvalidSession,

    #[error("role not allowed")]
    RoleNotAllowed,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials | AuthError::InvalidSession => ApiError::Unauthorized,
            AuthError::RoleNotAllowed => ApiError::Forbidden,
            AuthError::Database(e) => ApiError::Database(e),
        }
    }
}
