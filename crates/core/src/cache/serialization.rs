//! Pure functions for serializing record lists to and from cache bytes.
//!
//! Payloads are JSON so cached values stay human-readable when inspected.

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur during cache serialization/deserialization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SerializationError {
    /// Failed to serialize a value to bytes.
    #[error("Failed to serialize: {0}")]
    SerializeFailed(String),
    /// Failed to deserialize bytes to a value.
    #[error("Failed to deserialize: {0}")]
    DeserializeFailed(String),
}

/// Result type for serialization operations.
pub type Result<T> = std::result::Result<T, SerializationError>;

/// Serializes a slice of records to JSON bytes.
pub fn serialize_records<T: Serialize>(records: &[T]) -> Result<Vec<u8>> {
    serde_json::to_vec(records).map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Deserializes JSON bytes to a vector of records.
pub fn deserialize_records<T: DeserializeOwned>(bytes: &[u8]) -> Result<Vec<T>> {
    serde_json::from_slice(bytes).map_err(|e| SerializationError::DeserializeFailed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finance::{Category, CategoryDraft, TransactionType};
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn fixed_category(name: &str) -> Category {
        let timestamp = Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 0).unwrap();
        CategoryDraft::new(name, TransactionType::Expense, "#ef4444")
            .stamp("user-1", timestamp)
            .into_category(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap())
    }

    #[test]
    fn test_roundtrip_preserves_order() {
        let categories = vec![fixed_category("Travel"), fixed_category("Food & Dining")];

        let bytes = serialize_records(&categories).expect("serialize should succeed");
        let deserialized: Vec<Category> =
            deserialize_records(&bytes).expect("deserialize should succeed");

        assert_eq!(categories, deserialized);
    }

    #[test]
    fn test_serialize_empty_vec() {
        let categories: Vec<Category> = vec![];

        let bytes = serialize_records(&categories).expect("serialize should succeed");

        assert_eq!(bytes, b"[]");
    }

    #[test]
    fn test_deserialize_malformed_bytes() {
        let result = deserialize_records::<Category>(b"{\"invalid\": true}");

        assert!(matches!(
            result,
            Err(SerializationError::DeserializeFailed(_))
        ));
    }
}
