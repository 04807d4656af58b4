use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::use_cases::approve_time_entry::command::ApproveTimeEntry;
use crate::modules::time_entries::use_cases::approve_time_entry::decide::decide_approve;
use crate::modules::time_entries::use_cases::command_handler::{
    ApplicationError, Committed, TimeEntryCommandHandler, stream_id_for,
};
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;

impl<TEventStore, TOutbox> TimeEntryCommandHandler<TEventStore, TOutbox>
where
    TEventStore: EventStore<TimeEntryEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    #[tracing::instrument(skip(self, command), fields(time_entry_id = %command.time_entry_id))]
    pub async fn approve(&self, command: ApproveTimeEntry) -> Result<Committed, ApplicationError> {
        let stream_id = stream_id_for(&command.time_entry_id);
        let committed = self
            .execute(&stream_id, |state| decide_approve(state, command))
            .await?;
        tracing::info!("time entry approved");
        Ok(committed)
    }
}
