use crate::modules::time_entries::core::decision::{DecideError, Decision};
use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::core::events::v1::time_entry_approved::TimeEntryApprovedV1;
use crate::modules::time_entries::core::intents::{TimeEntryIntent, TimesheetStatusChanged};
use crate::modules::time_entries::core::state::TimeEntryState;
use crate::modules::time_entries::core::status::TimeEntryStatus;
use crate::modules::time_entries::use_cases::approve_time_entry::command::ApproveTimeEntry;
use crate::shared::core::primitives::non_blank;

pub fn decide_approve(state: &TimeEntryState, command: ApproveTimeEntry) -> Decision {
    let Some(entry) = state.entry() else {
        return Decision::reject(DecideError::NotFound);
    };
    if !entry.status.can_transition_to(TimeEntryStatus::Approved) {
        return Decision::reject(DecideError::InvalidTransition {
            from: entry.status,
            action: "approve",
        });
    }

    let note = non_blank(command.note);
    Decision::Accepted {
        events: vec![TimeEntryEvent::TimeEntryApprovedV1(TimeEntryApprovedV1 {
            time_entry_id: command.time_entry_id.clone(),
            note: note.clone(),
            occurred_at: command.occurred_at,
            actor: command.actor.clone(),
        })],
        intents: vec![TimeEntryIntent::NotifyTimesheetApproved {
            payload: TimesheetStatusChanged {
                time_entry_id: command.time_entry_id,
                employee_id: entry.employee_id.clone(),
                status: TimeEntryStatus::Approved,
                comment: note,
                occurred_at: command.occurred_at,
                actor: command.actor,
            },
        }],
    }
}
