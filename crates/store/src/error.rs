//! Error types for the storage layer.
//!
//! This module defines all error types used throughout the storage layer,
//! separated into resource state errors and backend errors.

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use thiserror::Error;
use uuid::Uuid;

/// The primary error type for all storage operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Resource state errors
    #[error(transparent)]
    Resource(#[from] ResourceError),

    /// Backend-specific errors
    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Errors related to resource state.
#[derive(Error, Debug)]
pub enum ResourceError {
    /// The requested company was not found.
    #[error("company not found: {id}")]
    CompanyNotFound { id: Uuid },

    /// The requested employee was not found within the given company.
    #[error("employee not found: companies/{company_id}/employees/{id}")]
    EmployeeNotFound { company_id: Uuid, id: Uuid },
}

/// Errors originating from the storage backend itself.
#[derive(Error, Debug)]
pub enum BackendError {
    /// A shared lock was poisoned by a panicking writer.
    #[error("storage lock poisoned: {0}")]
    LockPoisoned(String),

    /// Catch-all for backend failures.
    #[error("backend failure: {0}")]
    Internal(String),
}

/// Convenience result type for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let id = Uuid::nil();
        let err = StoreError::from(ResourceError::CompanyNotFound { id });
        assert_eq!(
            err.to_string(),
            "company not found: 00000000-0000-0000-0000-000000000000"
        );
    }

    #[test]
    fn test_backend_error_wraps() {
        let err = StoreError::from(BackendError::Internal("disk on fire".into()));
        assert!(err.to_string().contains("disk on fire"));
    }
}
