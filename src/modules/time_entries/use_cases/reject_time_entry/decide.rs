use crate::modules::time_entries::core::decision::{DecideError, Decision};
use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::core::events::v1::time_entry_rejected::TimeEntryRejectedV1;
use crate::modules::time_entries::core::intents::{TimeEntryIntent, TimesheetStatusChanged};
use crate::modules::time_entries::core::state::TimeEntryState;
use crate::modules::time_entries::core::status::TimeEntryStatus;
use crate::modules::time_entries::use_cases::reject_time_entry::command::RejectTimeEntry;
use crate::shared::core::primitives::non_blank;

pub fn decide_reject(state: &TimeEntryState, command: RejectTimeEntry) -> Decision {
    let Some(entry) = state.entry() else {
        return Decision::reject(DecideError::NotFound);
    };
    if !entry.status.can_transition_to(TimeEntryStatus::Rejected) {
        return Decision::reject(DecideError::InvalidTransition {
            from: entry.status,
            action: "reject",
        });
    }
    let Some(reason) = non_blank(Some(command.reason)) else {
        return Decision::reject(DecideError::MissingRejectionReason);
    };

    Decision::Accepted {
        events: vec![TimeEntryEvent::TimeEntryRejectedV1(TimeEntryRejectedV1 {
            time_entry_id: command.time_entry_id.clone(),
            reason: reason.clone(),
            occurred_at: command.occurred_at,
            actor: command.actor.clone(),
        })],
        intents: vec![TimeEntryIntent::NotifyTimesheetRejected {
            payload: TimesheetStatusChanged {
                time_entry_id: command.time_entry_id,
                employee_id: entry.employee_id.clone(),
                status: TimeEntryStatus::Rejected,
                comment: Some(reason),
                occurred_at: command.occurred_at,
                actor: command.actor,
            },
        }],
    }
}
