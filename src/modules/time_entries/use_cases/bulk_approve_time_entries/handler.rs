use crate::modules::time_entries::core::decision::DecideError;
use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::core::status::TimeEntryStatus;
use crate::modules::time_entries::use_cases::approve_time_entry::command::ApproveTimeEntry;
use crate::modules::time_entries::use_cases::bulk_approve_time_entries::command::BulkApproveTimeEntries;
use crate::modules::time_entries::use_cases::command_handler::{
    ApplicationError, Committed, TimeEntryCommandHandler,
};
use crate::shared::core::errors::{Classify, ErrorKind};
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ApprovalOutcome {
    Approved,
    /// The entry exists but was not pending; it is left untouched.
    Skipped { status: TimeEntryStatus },
    Failed { error: String, kind: ErrorKind },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BulkApprovalItem {
    pub time_entry_id: String,
    #[serde(flatten)]
    pub outcome: ApprovalOutcome,
}

#[derive(Debug, Default)]
pub struct BulkApproval {
    pub items: Vec<BulkApprovalItem>,
    pub committed: Vec<Committed>,
}

impl BulkApproval {
    pub fn approved_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| item.outcome == ApprovalOutcome::Approved)
            .count()
    }
}

fn outcome_for(error: &ApplicationError) -> ApprovalOutcome {
    match error {
        ApplicationError::Domain(DecideError::InvalidTransition { from, .. }) => {
            ApprovalOutcome::Skipped { status: *from }
        }
        other => ApprovalOutcome::Failed {
            error: other.to_string(),
            kind: other.kind(),
        },
    }
}

impl<TEventStore, TOutbox> TimeEntryCommandHandler<TEventStore, TOutbox>
where
    TEventStore: EventStore<TimeEntryEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    /// Approves every requested entry independently. One failing id never
    /// stops the others.
    #[tracing::instrument(skip(self, command), fields(requested = command.time_entry_ids.len()))]
    pub async fn bulk_approve(&self, command: BulkApproveTimeEntries) -> BulkApproval {
        let mut result = BulkApproval::default();

        for time_entry_id in command.distinct_ids() {
            let approve = ApproveTimeEntry {
                time_entry_id: time_entry_id.to_string(),
                note: command.note.clone(),
                occurred_at: command.occurred_at,
                actor: command.actor.clone(),
            };
            let outcome = match self.approve(approve).await {
                Ok(committed) => {
                    result.committed.push(committed);
                    ApprovalOutcome::Approved
                }
                Err(e) => {
                    tracing::warn!(time_entry_id, error = %e, "bulk approval item not approved");
                    outcome_for(&e)
                }
            };
            result.items.push(BulkApprovalItem {
                time_entry_id: time_entry_id.to_string(),
                outcome,
            });
        }

        tracing::info!(approved = result.approved_count(), "bulk approval finished");
        result
    }
}
