use crate::shared::core::errors::{Classify, ErrorKind};
use thiserror::Error;

/// Failure of a keyed document store (templates, schedules, directory data).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: String },

    #[error("{0}")]
    InvalidState(String),

    #[error("{0}")]
    Invalid(String),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        StoreError::NotFound {
            entity,
            id: id.into(),
        }
    }
}

impl Classify for StoreError {
    fn kind(&self) -> ErrorKind {
        match self {
            StoreError::NotFound { .. } => ErrorKind::NotFound,
            StoreError::InvalidState(_) => ErrorKind::InvalidState,
            StoreError::Invalid(_) => ErrorKind::Validation,
            StoreError::Unavailable(_) => ErrorKind::Transient,
        }
    }
}
