use crate::modules::scheduling::core::scheduled_job_location::ScheduledJobLocation;
use crate::modules::time_entries::core::decision::{DecideError, Decision};
use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::core::events::v1::time_entry_clocked_in::TimeEntryClockedInV1;
use crate::modules::time_entries::core::state::TimeEntryState;
use crate::modules::time_entries::use_cases::clock_in::command::ClockIn;
use crate::shared::core::primitives::{is_blank, non_blank};

/// Opens a draft entry. A referenced schedule must still be open, and fills in the location and
/// description when the caller leaves them blank.
pub fn decide_clock_in(
    state: &TimeEntryState,
    command: ClockIn,
    schedule: Option<&ScheduledJobLocation>,
) -> Decision {
    if !matches!(state, TimeEntryState::None) {
        return Decision::reject(DecideError::AlreadyExists);
    }
    if is_blank(&command.employee_id) {
        return Decision::reject(DecideError::MissingRequiredField("employee_id"));
    }
    if let Some(schedule) = schedule.filter(|s| !s.is_open()) {
        return Decision::reject(DecideError::ScheduleNotOpen(schedule.status));
    }

    let job_location = non_blank(Some(command.job_location))
        .or_else(|| schedule.map(|s| s.job_location.clone()));
    let Some(job_location) = job_location else {
        return Decision::reject(DecideError::MissingRequiredField("job_location"));
    };
    let description = non_blank(command.description)
        .or_else(|| schedule.and_then(|s| s.notes.clone()))
        .unwrap_or_default();

    Decision::accept(TimeEntryEvent::TimeEntryClockedInV1(TimeEntryClockedInV1 {
        time_entry_id: command.time_entry_id,
        employee_id: command.employee_id,
        start_time: command.start_time,
        job_location,
        scheduled_job_location_id: command.scheduled_job_location_id,
        description,
        occurred_at: command.occurred_at,
        actor: command.actor,
    }))
}
