//! Error types for the REST API.
//!
//! This module defines the semantic error type used throughout the REST
//! layer, with automatic conversion to JSON error responses.
//!
//! # Error Mapping
//!
//! Storage errors are mapped to HTTP status codes:
//!
//! | Storage Error | HTTP Status |
//! |--------------|-------------|
//! | CompanyNotFound | 404 |
//! | EmployeeNotFound | 404 |
//! | Backend errors | 500 |

use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use uuid::Uuid;

use roster_store::{ResourceError, StoreError};

/// The primary error type for REST API operations.
///
/// Variants map cleanly to HTTP status codes; the response body is a JSON
/// object carrying the status code and a message (plus field errors for
/// validation failures).
#[derive(Debug)]
pub enum RestError {
    /// Company not found (HTTP 404).
    CompanyNotFound {
        /// The company ID.
        id: Uuid,
    },

    /// Employee not found within the company (HTTP 404).
    EmployeeNotFound {
        /// The owning company ID.
        company_id: Uuid,
        /// The employee ID.
        id: Uuid,
    },

    /// Bad request - malformed parameters or body (HTTP 400).
    BadRequest {
        /// Error message.
        message: String,
    },

    /// Unprocessable entity - the body parsed but failed validation
    /// (HTTP 422).
    UnprocessableEntity {
        /// Per-field validation errors.
        errors: Vec<String>,
    },

    /// Internal server error (HTTP 500).
    InternalError {
        /// Error message.
        message: String,
    },
}

/// Convenience result type for handler functions.
pub type RestResult<T> = Result<T, RestError>;

impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestError::CompanyNotFound { id } => {
                write!(f, "Company not found: {}", id)
            }
            RestError::EmployeeNotFound { company_id, id } => {
                write!(f, "Employee not found: {}/{}", company_id, id)
            }
            RestError::BadRequest { message } => {
                write!(f, "Bad request: {}", message)
            }
            RestError::UnprocessableEntity { errors } => {
                write!(f, "Validation failed: {}", errors.join("; "))
            }
            RestError::InternalError { message } => {
                write!(f, "Internal error: {}", message)
            }
        }
    }
}

impl std::error::Error for RestError {}

impl RestError {
    /// The HTTP status code this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::CompanyNotFound { .. } | RestError::EmployeeNotFound { .. } => {
                StatusCode::NOT_FOUND
            }
            RestError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            RestError::UnprocessableEntity { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            RestError::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for RestError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Resource(ResourceError::CompanyNotFound { id }) => {
                RestError::CompanyNotFound { id }
            }
            StoreError::Resource(ResourceError::EmployeeNotFound { company_id, id }) => {
                RestError::EmployeeNotFound { company_id, id }
            }
            StoreError::Backend(err) => RestError::InternalError {
                message: err.to_string(),
            },
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            RestError::UnprocessableEntity { errors } => json!({
                "statusCode": status.as_u16(),
                "message": "validation failed",
                "errors": errors,
            }),
            other => json!({
                "statusCode": status.as_u16(),
                "message": other.to_string(),
            }),
        };
        (status, Json(body)).into_response()
    }
}
