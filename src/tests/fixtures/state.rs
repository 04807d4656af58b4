use crate::modules::time_entries::core::state::TimeEntry;
use crate::modules::time_entries::core::status::TimeEntryStatus;
use crate::tests::fixtures::commands::clock_in::ClockInBuilder;

const EIGHT_HOURS: i64 = 8 * 3_600_000;

/// A clocked-out draft worth eight hours, as folded after clock-in and clock-out.
pub fn make_draft_time_entry() -> TimeEntry {
    let command = ClockInBuilder::new().build();
    TimeEntry {
        time_entry_id: command.time_entry_id,
        employee_id: command.employee_id.clone(),
        start_time: command.start_time,
        end_time: Some(command.start_time + EIGHT_HOURS),
        job_location: command.job_location,
        scheduled_job_location_id: None,
        description: command.description.unwrap_or_default(),
        status: TimeEntryStatus::Draft,
        total_hours: Some(8.0),
        manager_notes: None,
        rejection_reason: None,
        created_at: command.start_time,
        created_by: command.employee_id.clone(),
        updated_at: command.start_time + EIGHT_HOURS,
        updated_by: command.employee_id,
    }
}
