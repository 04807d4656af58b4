use crate::modules::scheduling::core::template::TemplateError;
use crate::shared::core::errors::{Classify, ErrorKind};
use crate::shared::infrastructure::store::StoreError;
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchedulingError {
    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("end date {end} is before start date {start}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("range of {days} days exceeds the maximum of {max}")]
    RangeTooLong { days: u32, max: u32 },
}

impl Classify for SchedulingError {
    fn kind(&self) -> ErrorKind {
        match self {
            SchedulingError::Template(e) => e.kind(),
            SchedulingError::Store(e) => e.kind(),
            SchedulingError::InvalidRange { .. } | SchedulingError::RangeTooLong { .. } => {
                ErrorKind::Validation
            }
        }
    }
}
