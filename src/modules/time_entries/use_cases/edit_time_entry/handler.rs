use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::use_cases::command_handler::{
    ApplicationError, Committed, TimeEntryCommandHandler, stream_id_for,
};
use crate::modules::time_entries::use_cases::edit_time_entry::command::EditTimeEntry;
use crate::modules::time_entries::use_cases::edit_time_entry::decide::decide_edit;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;

impl<TEventStore, TOutbox> TimeEntryCommandHandler<TEventStore, TOutbox>
where
    TEventStore: EventStore<TimeEntryEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    #[tracing::instrument(
        skip(self, command),
        fields(time_entry_id = %command.time_entry_id, editor = ?command.editor)
    )]
    pub async fn edit(&self, command: EditTimeEntry) -> Result<Committed, ApplicationError> {
        let stream_id = stream_id_for(&command.time_entry_id);
        self.execute(&stream_id, |state| decide_edit(state, command))
            .await
    }
}
