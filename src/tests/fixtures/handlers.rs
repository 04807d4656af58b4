use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::core::state::TimeEntry;
use crate::modules::time_entries::use_cases::clock_in::decide::decide_clock_in;
use crate::modules::time_entries::use_cases::clock_out::command::ClockOut;
use crate::modules::time_entries::use_cases::clock_out::decide::decide_clock_out;
use crate::modules::time_entries::use_cases::command_handler::{
    TimeEntryCommandHandler, stream_id_for,
};
use crate::modules::time_entries::use_cases::submit_time_entry::command::SubmitTimeEntry;
use crate::shared::core::primitives::new_id;
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use crate::shared::infrastructure::intent_outbox::in_memory::InMemoryDomainOutbox;
use crate::tests::fixtures::commands::clock_in::ClockInBuilder;
use std::sync::Arc;

pub type TestHandler =
    TimeEntryCommandHandler<InMemoryEventStore<TimeEntryEvent>, InMemoryDomainOutbox>;

pub fn make_command_handler() -> TestHandler {
    TimeEntryCommandHandler::new(
        "time-entries.v1",
        Arc::new(InMemoryEventStore::new()),
        Arc::new(InMemoryDomainOutbox::new()),
    )
}

/// Clocks a fresh entry in and out, eight hours apart. Stream ends at version 2.
pub async fn seed_draft(handler: &TestHandler) -> TimeEntry {
    let command = ClockInBuilder::new().time_entry_id(new_id()).build();
    let stream_id = stream_id_for(&command.time_entry_id);
    let clock_out = ClockOut {
        time_entry_id: command.time_entry_id.clone(),
        end_time: command.start_time + 8 * 3_600_000,
        occurred_at: command.start_time + 8 * 3_600_000,
        actor: command.actor.clone(),
    };

    handler
        .execute(&stream_id, |state| decide_clock_in(state, command, None))
        .await
        .expect("seed clock in failed");
    let committed = handler
        .execute(&stream_id, |state| decide_clock_out(state, clock_out))
        .await
        .expect("seed clock out failed");
    committed.state.entry().cloned().expect("seeded entry")
}

/// A draft that has been submitted for approval.
pub async fn seed_pending(handler: &TestHandler) -> TimeEntry {
    let draft = seed_draft(handler).await;
    let committed = handler
        .submit(SubmitTimeEntry {
            time_entry_id: draft.time_entry_id.clone(),
            occurred_at: draft.updated_at + 1,
            actor: draft.employee_id.clone(),
        })
        .await
        .expect("seed submit failed");
    committed.state.entry().cloned().expect("submitted entry")
}
