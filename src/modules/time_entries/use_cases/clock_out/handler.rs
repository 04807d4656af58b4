use crate::modules::scheduling::adapters::outbound::stores::ScheduledJobLocationStore;
use crate::modules::scheduling::core::schedule_status::ScheduleStatus;
use crate::modules::scheduling::use_cases::scheduled_job_locations::handler::update_schedule_status;
use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::use_cases::clock_out::command::ClockOut;
use crate::modules::time_entries::use_cases::clock_out::decide::decide_clock_out;
use crate::modules::time_entries::use_cases::command_handler::{
    ApplicationError, Committed, TimeEntryCommandHandler, stream_id_for,
};
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use crate::shared::infrastructure::store::StoreError;
use std::sync::Arc;

pub struct ClockOutHandler<TEventStore, TOutbox>
where
    TEventStore: EventStore<TimeEntryEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    commands: Arc<TimeEntryCommandHandler<TEventStore, TOutbox>>,
    schedules: Arc<dyn ScheduledJobLocationStore>,
}

impl<TEventStore, TOutbox> ClockOutHandler<TEventStore, TOutbox>
where
    TEventStore: EventStore<TimeEntryEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    pub fn new(
        commands: Arc<TimeEntryCommandHandler<TEventStore, TOutbox>>,
        schedules: Arc<dyn ScheduledJobLocationStore>,
    ) -> Self {
        Self {
            commands,
            schedules,
        }
    }

    #[tracing::instrument(skip(self, command), fields(time_entry_id = %command.time_entry_id))]
    pub async fn handle(&self, command: ClockOut) -> Result<Committed, ApplicationError> {
        let stream_id = stream_id_for(&command.time_entry_id);
        let committed = self
            .commands
            .execute(&stream_id, |state| decide_clock_out(state, command))
            .await?;

        let schedule_id = committed
            .state
            .entry()
            .and_then(|entry| entry.scheduled_job_location_id.clone());
        if let Some(schedule_id) = schedule_id {
            match update_schedule_status(&*self.schedules, &schedule_id, ScheduleStatus::Completed)
                .await
            {
                Ok(_) => {}
                Err(StoreError::InvalidState(reason)) => {
                    tracing::warn!(%schedule_id, %reason, "schedule left as is after clock-out");
                }
                Err(e) => return Err(e.into()),
            }
        }
        tracing::info!("clocked out");
        Ok(committed)
    }
}
