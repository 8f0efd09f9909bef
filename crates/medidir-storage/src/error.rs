//! Storage error types for the storage abstraction layer.

use std::fmt;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The requested record was not found.
    #[error("Doctor not found: {id}")]
    NotFound {
        /// The identifier that did not resolve.
        id: String,
    },

    /// Attempted to insert a record whose identifier is already taken.
    #[error("Doctor already exists: {id}")]
    AlreadyExists {
        /// The identifier that is already in use.
        id: String,
    },

    /// Failed to reach the storage backend.
    #[error("Connection error: {message}")]
    ConnectionError {
        /// Description of the connection failure.
        message: String,
    },

    /// An internal storage error occurred.
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error.
        message: String,
    },
}

impl StorageError {
    /// Creates a new `NotFound` error.
    #[must_use]
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// Creates a new `AlreadyExists` error.
    #[must_use]
    pub fn already_exists(id: impl Into<String>) -> Self {
        Self::AlreadyExists { id: id.into() }
    }

    /// Creates a new `ConnectionError` error.
    #[must_use]
    pub fn connection_error(message: impl Into<String>) -> Self {
        Self::ConnectionError {
            message: message.into(),
        }
    }

    /// Creates a new `Internal` error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns `true` if this is a not found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns `true` if this is an already exists error.
    #[must_use]
    pub fn is_already_exists(&self) -> bool {
        matches!(self, Self::AlreadyExists { .. })
    }

    /// Returns the error category for logging/monitoring purposes.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NotFound { .. } => ErrorCategory::NotFound,
            Self::AlreadyExists { .. } => ErrorCategory::Conflict,
            Self::ConnectionError { .. } => ErrorCategory::Infrastructure,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Categories of storage errors for logging and monitoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Record not found.
    NotFound,
    /// Identifier conflict.
    Conflict,
    /// Infrastructure/connection error.
    Infrastructure,
    /// Internal error.
    Internal,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "not_found"),
            Self::Conflict => write!(f, "conflict"),
            Self::Infrastructure => write!(f, "infrastructure"),
            Self::Internal => write!(f, "internal"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StorageError::not_found("abc-123");
        assert_eq!(err.to_string(), "Doctor not found: abc-123");

        let err = StorageError::already_exists("abc-123");
        assert_eq!(err.to_string(), "Doctor already exists: abc-123");

        let err = StorageError::internal("map poisoned");
        assert_eq!(err.to_string(), "Internal error: map poisoned");
    }

    #[test]
    fn test_error_predicates() {
        let err = StorageError::not_found("abc-123");
        assert!(err.is_not_found());
        assert!(!err.is_already_exists());

        let err = StorageError::already_exists("abc-123");
        assert!(!err.is_not_found());
        assert!(err.is_already_exists());
    }

    #[test]
    fn test_error_category() {
        assert_eq!(
            StorageError::not_found("x").category(),
            ErrorCategory::NotFound
        );
        assert_eq!(
            StorageError::already_exists("x").category(),
            ErrorCategory::Conflict
        );
        assert_eq!(
            StorageError::connection_error("refused").category(),
            ErrorCategory::Infrastructure
        );
        assert_eq!(
            StorageError::internal("boom").category(),
            ErrorCategory::Internal
        );
    }

    #[test]
    fn test_category_display() {
        assert_eq!(ErrorCategory::NotFound.to_string(), "not_found");
        assert_eq!(ErrorCategory::Infrastructure.to_string(), "infrastructure");
    }
}
