use crate::modules::time_entries::core::decision::{DecideError, Decision};
use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::core::events::v1::time_entry_submitted::TimeEntrySubmittedV1;
use crate::modules::time_entries::core::intents::{TimeEntryIntent, TimesheetStatusChanged};
use crate::modules::time_entries::core::state::TimeEntryState;
use crate::modules::time_entries::core::status::TimeEntryStatus;
use crate::modules::time_entries::use_cases::submit_time_entry::command::SubmitTimeEntry;

/// Hands a draft over for review. The entry must be clocked out first so the manager sees a
/// complete interval.
pub fn decide_submit(state: &TimeEntryState, command: SubmitTimeEntry) -> Decision {
    let Some(entry) = state.entry() else {
        return Decision::reject(DecideError::NotFound);
    };
    if !entry.status.can_transition_to(TimeEntryStatus::Pending) {
        return Decision::reject(DecideError::InvalidTransition {
            from: entry.status,
            action: "submit",
        });
    }
    if entry.is_clocked_in() {
        return Decision::reject(DecideError::StillClockedIn);
    }

    Decision::Accepted {
        events: vec![TimeEntryEvent::TimeEntrySubmittedV1(TimeEntrySubmittedV1 {
            time_entry_id: command.time_entry_id.clone(),
            occurred_at: command.occurred_at,
            actor: command.actor.clone(),
        })],
        intents: vec![TimeEntryIntent::NotifyTimesheetSubmitted {
            payload: TimesheetStatusChanged {
                time_entry_id: command.time_entry_id,
                employee_id: entry.employee_id.clone(),
                status: TimeEntryStatus::Pending,
                comment: None,
                occurred_at: command.occurred_at,
                actor: command.actor,
            },
        }],
    }
}
