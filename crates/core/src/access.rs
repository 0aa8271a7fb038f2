use thiserror::Error;

use crate::finance::RecordError;
use crate::storage::RepositoryError;

/// Errors returned by resource accessor operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// A write was attempted with nobody signed in.
    #[error("User not authenticated")]
    Unauthenticated,
    /// The draft failed client-side validation.
    #[error(transparent)]
    Invalid(#[from] RecordError),
    /// The remote store rejected or failed the call.
    #[error(transparent)]
    Remote(#[from] RepositoryError),
}

/// Result type for accessor operations.
pub type Result<T> = std::result::Result<T, AccessError>;
