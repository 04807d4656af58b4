use crate::modules::time_entries::core::status::TimeEntryStatus;
use crate::modules::time_entries::use_cases::list_time_entries::projection::TimeEntryRow;

pub fn make_time_entry_row(time_entry_id: &str, start_time: i64) -> TimeEntryRow {
    TimeEntryRow {
        time_entry_id: time_entry_id.to_string(),
        employee_id: "emp-fixed-0001".to_string(),
        start_time,
        end_time: None,
        job_location: "Downtown Office - Springfield, IL".to_string(),
        scheduled_job_location_id: None,
        description: String::new(),
        status: TimeEntryStatus::Draft,
        total_hours: None,
        manager_notes: None,
        rejection_reason: None,
        created_at: start_time,
        created_by: "emp-fixed-0001".to_string(),
        updated_at: start_time,
        updated_by: "emp-fixed-0001".to_string(),
        last_event_id: Some(format!("TimeEntry-{time_entry_id}:1")),
    }
}
