use std::fmt::Display;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, TransactionError};
use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid configuration {0}")]
    ConfigError(#[from] figment::Error),
    #[error("Database error: {0}")]
    DbError(#[from] DbErr),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Custom error: {0}")]
    Custom(String),
    #[error("Auth error: {0}")]
    AuthError(#[from] AuthError),
    #[error("JWT error: {0}")]
    TokenError(#[from] jsonwebtoken::errors::Error),
    #[error("Staff directory error: {0}")]
    DirectoryError(#[from] reqwest::Error),
    #[error(transparent)]
    ApiError(#[from] ApiError),
}

/// Classification shared by every failure the cleaning module reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    InvalidArgument,
    NotFound,
    InvalidState,
    Internal,
}

impl ErrorKind {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ErrorKind::InvalidArgument | ErrorKind::InvalidState => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl Error {
    /// Typed API errors keep their kind, anything else is an internal failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::ApiError(e) => e.kind(),
            _ => ErrorKind::Internal,
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    InvalidRequest(String),
    #[error("{0} not found")]
    NotFound(String),
    #[error("{0}")]
    InvalidState(String),
    #[error("Internal server error")]
    InternalServerError,
    #[error(transparent)]
    AuthError(#[from] AuthError),
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::InvalidRequest(_) => ErrorKind::InvalidArgument,
            ApiError::NotFound(_) => ErrorKind::NotFound,
            ApiError::InvalidState(_) => ErrorKind::InvalidState,
            ApiError::InternalServerError | ApiError::AuthError(_) => ErrorKind::Internal,
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid token")]
    InvalidToken,
    #[error("Permission denied")]
    PermissionDenied,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ErrorMsg {
    pub msg: String,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = match self {
            AuthError::InvalidToken => StatusCode::UNAUTHORIZED,
            AuthError::PermissionDenied => StatusCode::FORBIDDEN,
        };
        tracing::warn!("{}", self);
        (
            status,
            Json(ErrorMsg {
                msg: self.to_string(),
            }),
        )
            .into_response()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::AuthError(e) => e.into_response(),
            ApiError::InternalServerError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorMsg {
                    msg: self.to_string(),
                }),
            )
                .into_response(),
            _ => {
                let kind = self.kind();
                tracing::warn!(%kind, "{}", self);
                (
                    kind.status_code(),
                    Json(ErrorMsg {
                        msg: self.to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

impl From<Error> for ApiError {
    fn from(e: Error) -> Self {
        match e {
            Error::ApiError(e) => e,
            Error::AuthError(e) => ApiError::AuthError(e),
            _ => {
                tracing::error!(kind = %ErrorKind::Internal, "{}", e);
                ApiError::InternalServerError
            }
        }
    }
}

impl From<TransactionError<Error>> for Error {
    fn from(e: TransactionError<Error>) -> Self {
        match e {
            TransactionError::Connection(e) => Error::DbError(e),
            TransactionError::Transaction(e) => e,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidRequest(rejection.body_text())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        let e: Error = ApiError::NotFound("Cleaning task 4".to_string()).into();
        assert_eq!(e.kind(), ErrorKind::NotFound);
        assert_eq!(e.to_string(), "Cleaning task 4 not found");
        let e: Error = DbErr::Custom("boom".to_string()).into();
        assert_eq!(e.kind(), ErrorKind::Internal);
        assert_eq!(ErrorKind::InvalidState.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorKind::InvalidArgument.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_transaction_errors_keep_their_kind() {
        let e: Error = TransactionError::Transaction(Error::from(ApiError::InvalidState(
            "Cleaning task 1 is already completed".to_string(),
        )))
        .into();
        assert_eq!(e.kind(), ErrorKind::InvalidState);
        let e: Error = TransactionError::<Error>::Connection(DbErr::Custom("gone".to_string())).into();
        assert_eq!(e.kind(), ErrorKind::Internal);
    }

    #[test]
    fn test_internal_errors_are_hidden() {
        let e = ApiError::from(Error::Custom("secret detail".to_string()));
        assert!(matches!(e, ApiError::InternalServerError));
        let resp = e.into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let resp = ApiError::from(AuthError::PermissionDenied).into_response();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }
}
