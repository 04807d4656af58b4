use crate::modules::time_entries::core::state::TimeEntry;
use crate::modules::time_entries::core::status::TimeEntryStatus;

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimeEntryRow {
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
    pub last_event_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimeEntryView {
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

impl From<TimeEntryRow> for TimeEntryView {
    fn from(row: TimeEntryRow) -> Self {
        Self {
            time_entry_id: row.time_entry_id,
            employee_id: row.employee_id,
            start_time: row.start_time,
            end_time: row.end_time,
            job_location: row.job_location,
            scheduled_job_location_id: row.scheduled_job_location_id,
            description: row.description,
            status: row.status,
            total_hours: row.total_hours,
            manager_notes: row.manager_notes,
            rejection_reason: row.rejection_reason,
            created_at: row.created_at,
            created_by: row.created_by,
            updated_at: row.updated_at,
            updated_by: row.updated_by,
        }
    }
}

impl From<&TimeEntry> for TimeEntryView {
    fn from(entry: &TimeEntry) -> Self {
        Self {
            time_entry_id: entry.time_entry_id.clone(),
            employee_id: entry.employee_id.clone(),
            start_time: entry.start_time,
            end_time: entry.end_time,
            job_location: entry.job_location.clone(),
            scheduled_job_location_id: entry.scheduled_job_location_id.clone(),
            description: entry.description.clone(),
            status: entry.status,
            total_hours: entry.total_hours,
            manager_notes: entry.manager_notes.clone(),
            rejection_reason: entry.rejection_reason.clone(),
            created_at: entry.created_at,
            created_by: entry.created_by.clone(),
            updated_at: entry.updated_at,
            updated_by: entry.updated_by.clone(),
        }
    }
}
