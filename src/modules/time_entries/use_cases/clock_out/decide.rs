use crate::modules::time_entries::core::decision::{DecideError, Decision};
use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::core::events::v1::time_entry_clocked_out::TimeEntryClockedOutV1;
use crate::modules::time_entries::core::state::TimeEntryState;
use crate::modules::time_entries::core::status::TimeEntryStatus;
use crate::modules::time_entries::use_cases::clock_out::command::ClockOut;
use crate::shared::core::primitives::hours_between;

pub fn decide_clock_out(state: &TimeEntryState, command: ClockOut) -> Decision {
    let Some(entry) = state.entry() else {
        return Decision::reject(DecideError::NotFound);
    };
    if entry.status != TimeEntryStatus::Draft {
        return Decision::reject(DecideError::InvalidTransition {
            from: entry.status,
            action: "clock out",
        });
    }
    if !entry.is_clocked_in() {
        return Decision::reject(DecideError::AlreadyClockedOut);
    }
    let Some(total_hours) = hours_between(entry.start_time, command.end_time) else {
        return Decision::reject(DecideError::InvalidInterval);
    };

    Decision::accept(TimeEntryEvent::TimeEntryClockedOutV1(TimeEntryClockedOutV1 {
        time_entry_id: command.time_entry_id,
        end_time: command.end_time,
        total_hours,
        occurred_at: command.occurred_at,
        actor: command.actor,
    }))
}
