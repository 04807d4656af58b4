use crate::modules::time_entries::core::decision::{DecideError, Decision};
use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::core::events::v1::time_entry_deleted::TimeEntryDeletedV1;
use crate::modules::time_entries::core::state::TimeEntryState;
use crate::modules::time_entries::core::status::TimeEntryStatus;
use crate::modules::time_entries::use_cases::delete_time_entry::command::DeleteTimeEntry;

pub fn decide_delete(state: &TimeEntryState, command: DeleteTimeEntry) -> Decision {
    let Some(entry) = state.entry() else {
        return Decision::reject(DecideError::NotFound);
    };
    if entry.status != TimeEntryStatus::Draft {
        return Decision::reject(DecideError::InvalidTransition {
            from: entry.status,
            action: "delete",
        });
    }
    Decision::accept(TimeEntryEvent::TimeEntryDeletedV1(TimeEntryDeletedV1 {
        time_entry_id: command.time_entry_id,
        occurred_at: command.occurred_at,
        actor: command.actor,
    }))
}
