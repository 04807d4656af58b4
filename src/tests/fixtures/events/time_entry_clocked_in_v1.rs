use crate::modules::time_entries::core::events::v1::time_entry_clocked_in::TimeEntryClockedInV1;
use crate::tests::fixtures::commands::clock_in::ClockInBuilder;

/// Builder function returning a canonical event instance for tests.
pub fn make_time_entry_clocked_in_v1_event() -> TimeEntryClockedInV1 {
    let command = ClockInBuilder::new().build();
    TimeEntryClockedInV1 {
        time_entry_id: command.time_entry_id,
        employee_id: command.employee_id,
        start_time: command.start_time,
        job_location: command.job_location,
        scheduled_job_location_id: command.scheduled_job_location_id,
        description: command.description.unwrap_or_default(),
        occurred_at: command.occurred_at,
        actor: command.actor,
    }
}
