use crate::modules::time_entries::core::status::TimeEntryStatus;

/// A time entry as folded from its event stream.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeEntry {
    pub time_entry_id: String,
    pub employee_id: String,
    pub start_time: i64,
    pub end_time: Option<i64>,
    pub job_location: String,
    pub scheduled_job_location_id: Option<String>,
    pub description: String,
    pub status: TimeEntryStatus,
    pub total_hours: Option<f64>,
    pub manager_notes: Option<String>,
    pub rejection_reason: Option<String>,
    pub created_at: i64,
    pub created_by: String,
    pub updated_at: i64,
    pub updated_by: String,
}

impl TimeEntry {
    pub fn is_clocked_in(&self) -> bool {
        self.end_time.is_none()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TimeEntryState {
    None,
    Recorded(TimeEntry),
    Deleted {
        time_entry_id: String,
        deleted_at: i64,
    },
}

impl TimeEntryState {
    pub fn entry(&self) -> Option<&TimeEntry> {
        match self {
            TimeEntryState::Recorded(entry) => Some(entry),
            _ => None,
        }
    }
}
