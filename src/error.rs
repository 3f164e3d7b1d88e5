//! HTTP-facing error type.
//!
//! Error responses carry a status code and nothing else: the message and
//! details are written to the log, never echoed to the client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};

use crate::application::services::StudentServiceError;
use crate::domain::validation::StudentValidationError;

#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::BadRequest {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Status code this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match self {
            AppError::BadRequest { message, details } => {
                tracing::warn!(%status, %details, "{message}");
            }
            AppError::Internal { message, details } => {
                tracing::error!(%status, %details, "{message}");
            }
        }

        status.into_response()
    }
}

impl From<StudentValidationError> for AppError {
    fn from(e: StudentValidationError) -> Self {
        AppError::bad_request(
            "Student payload failed validation",
            json!({ "violations": e.violations }),
        )
    }
}

/// Every service failure becomes a 500, duplicate emails included.
impl From<StudentServiceError> for AppError {
    fn from(e: StudentServiceError) -> Self {
        let kind = match &e {
            StudentServiceError::InvalidArgument(_) => "invalid_argument",
            StudentServiceError::DuplicateEmail { .. } => "duplicate_email",
            StudentServiceError::CreationFailed(_) => "creation_failed",
            StudentServiceError::RetrievalFailed(_) => "retrieval_failed",
        };

        let cause = std::error::Error::source(&e).map(|source| source.to_string());

        AppError::internal(e.to_string(), json!({ "kind": kind, "cause": cause }))
    }
}
