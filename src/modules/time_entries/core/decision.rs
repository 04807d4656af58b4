use crate::modules::scheduling::core::schedule_status::ScheduleStatus;
use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::core::events::v1::time_entry_edited::Editor;
use crate::modules::time_entries::core::intents::TimeEntryIntent;
use crate::modules::time_entries::core::status::TimeEntryStatus;
use crate::shared::core::errors::{Classify, ErrorKind};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("time entry already exists")]
    AlreadyExists,

    #[error("time entry not found")]
    NotFound,

    #[error("{0} is required")]
    MissingRequiredField(&'static str),

    #[error("end time must be after start time")]
    InvalidInterval,

    #[error("time entry is already clocked out")]
    AlreadyClockedOut,

    #[error("time entry is still clocked in")]
    StillClockedIn,

    #[error("cannot {action} time entry in status {from}")]
    InvalidTransition {
        from: TimeEntryStatus,
        action: &'static str,
    },

    #[error("{editor:?} cannot edit time entry in status {status}")]
    NotEditable {
        status: TimeEntryStatus,
        editor: Editor,
    },

    #[error("a rejection reason is required")]
    MissingRejectionReason,

    #[error("scheduled job location is {0}, not open for clock-in")]
    ScheduleNotOpen(ScheduleStatus),
}

impl Classify for DecideError {
    fn kind(&self) -> ErrorKind {
        match self {
            DecideError::NotFound => ErrorKind::NotFound,
            DecideError::MissingRequiredField(_)
            | DecideError::InvalidInterval
            | DecideError::MissingRejectionReason => ErrorKind::Validation,
            DecideError::AlreadyExists
            | DecideError::AlreadyClockedOut
            | DecideError::StillClockedIn
            | DecideError::InvalidTransition { .. }
            | DecideError::NotEditable { .. }
            | DecideError::ScheduleNotOpen(_) => ErrorKind::InvalidState,
        }
    }
}

pub enum Decision {
    Accepted {
        events: Vec<TimeEntryEvent>,
        intents: Vec<TimeEntryIntent>,
    },
    Rejected {
        reason: DecideError,
    },
}

impl Decision {
    pub fn accept(event: TimeEntryEvent) -> Self {
        Decision::Accepted {
            events: vec![event],
            intents: vec![],
        }
    }

    pub fn reject(reason: DecideError) -> Self {
        Decision::Rejected { reason }
    }
}
