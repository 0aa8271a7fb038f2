use thiserror::Error;

use crate::finance::RecordError;

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("{entity_type} already exists: {id}")]
    AlreadyExists {
        entity_type: &'static str,
        id: String,
    },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl From<RecordError> for RepositoryError {
    fn from(err: RecordError) -> Self {
        RepositoryError::InvalidData(err.to_string())
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_not_found_display() {
        let error = RepositoryError::NotFound {
            entity_type: "Transaction",
            id: "abc-123".to_string(),
        };
        assert_eq!(error.to_string(), "Transaction not found: abc-123");
    }

    #[test]
    fn test_repository_error_already_exists_display() {
        let error = RepositoryError::AlreadyExists {
            entity_type: "Category",
            id: "salary".to_string(),
        };
        assert_eq!(error.to_string(), "Category already exists: salary");
    }

    #[test]
    fn test_repository_error_connection_failed_display() {
        let error = RepositoryError::ConnectionFailed("timeout after 30s".to_string());
        assert_eq!(error.to_string(), "Connection failed: timeout after 30s");
    }

    #[test]
    fn test_repository_error_query_failed_display() {
        let error = RepositoryError::QueryFailed("permission denied".to_string());
        assert_eq!(error.to_string(), "Query failed: permission denied");
    }

    #[test]
    fn test_record_error_converts_to_invalid_data() {
        let error: RepositoryError = RecordError::NegativeAmount(-10).into();
        assert_eq!(
            error.to_string(),
            "Invalid data: Amount cannot be negative: -10"
        );
    }
}
