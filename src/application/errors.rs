//! Service error taxonomy
//!
//! Services raise these at the point of detection and never catch them. The
//! HTTP error translator is the only place they are mapped to responses.

use crate::application::ports::outbound::RepoError;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// The request is well-formed but semantically invalid
    #[error("{0}")]
    InvalidArgument(String),

    /// A referenced resource does not exist
    #[error("{0}")]
    NotFound(String),

    /// The operation is forbidden by the current persisted state
    #[error("{0}")]
    ConflictState(String),

    /// A uniqueness or integrity rule fired in storage
    #[error("{0}")]
    StorageConstraint(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl ServiceError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn conflict_state(message: impl Into<String>) -> Self {
        Self::ConflictState(message.into())
    }
}

impl From<RepoError> for ServiceError {
    fn from(e: RepoError) -> Self {
        match e {
            RepoError::Constraint(cause) => Self::StorageConstraint(cause),
            RepoError::Database(cause) => Self::Unexpected(cause),
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
