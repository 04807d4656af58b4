use crate::modules::directory::core::job_location::MissingJobLocationField;
use crate::shared::core::errors::{Classify, ErrorKind};
use crate::shared::infrastructure::store::StoreError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DirectoryError {
    #[error(transparent)]
    Invalid(#[from] MissingJobLocationField),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl Classify for DirectoryError {
    fn kind(&self) -> ErrorKind {
        match self {
            DirectoryError::Invalid(e) => e.kind(),
            DirectoryError::Store(e) => e.kind(),
        }
    }
}
