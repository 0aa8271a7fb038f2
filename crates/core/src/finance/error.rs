use thiserror::Error;

/// Errors that can occur when validating finance records.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("Amount cannot be negative: {0}")]
    NegativeAmount(i64),
    #[error("Category name cannot be empty")]
    EmptyName,
    #[error("Category name too long (max 50 characters)")]
    NameTooLong,
    #[error("Invalid color format: {0}")]
    InvalidColor(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_error_display() {
        assert_eq!(
            RecordError::NegativeAmount(-5).to_string(),
            "Amount cannot be negative: -5"
        );
        assert_eq!(
            RecordError::EmptyName.to_string(),
            "Category name cannot be empty"
        );
        assert_eq!(
            RecordError::InvalidColor("#xyz".to_string()).to_string(),
            "Invalid color format: #xyz"
        );
    }
}
