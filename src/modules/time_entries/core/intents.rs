use crate::modules::time_entries::core::status::TimeEntryStatus;
use serde::{Deserialize, Serialize};

/// Notification about a timesheet changing hands between employee and manager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimesheetStatusChanged {
    pub time_entry_id: String,
    pub employee_id: String,
    pub status: TimeEntryStatus,
    pub comment: Option<String>,
    pub occurred_at: i64,
    pub actor: String,
}

/// Domain intents produced by a decider alongside its events.
/// The outbound intent_outbox adapter translates these into OutboxRows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeEntryIntent {
    NotifyTimesheetSubmitted { payload: TimesheetStatusChanged },
    NotifyTimesheetApproved { payload: TimesheetStatusChanged },
    NotifyTimesheetRejected { payload: TimesheetStatusChanged },
}

impl TimeEntryIntent {
    pub fn event_type(&self) -> &'static str {
        match self {
            TimeEntryIntent::NotifyTimesheetSubmitted { .. } => "TimesheetSubmitted",
            TimeEntryIntent::NotifyTimesheetApproved { .. } => "TimesheetApproved",
            TimeEntryIntent::NotifyTimesheetRejected { .. } => "TimesheetRejected",
        }
    }

    pub fn payload(&self) -> &TimesheetStatusChanged {
        match self {
            TimeEntryIntent::NotifyTimesheetSubmitted { payload }
            | TimeEntryIntent::NotifyTimesheetApproved { payload }
            | TimeEntryIntent::NotifyTimesheetRejected { payload } => payload,
        }
    }
}
