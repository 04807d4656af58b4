use crate::modules::scheduling::adapters::outbound::stores::ScheduledJobLocationStore;
use crate::modules::scheduling::core::schedule_status::ScheduleStatus;
use crate::modules::scheduling::core::scheduled_job_location::ScheduledJobLocation;
use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::use_cases::clock_in::command::ClockIn;
use crate::modules::time_entries::use_cases::clock_in::decide::decide_clock_in;
use crate::modules::time_entries::use_cases::command_handler::{
    ApplicationError, Committed, TimeEntryCommandHandler, stream_id_for,
};
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use crate::shared::infrastructure::store::StoreError;
use std::sync::Arc;

pub struct ClockInHandler<TEventStore, TOutbox>
where
    TEventStore: EventStore<TimeEntryEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    commands: Arc<TimeEntryCommandHandler<TEventStore, TOutbox>>,
    schedules: Arc<dyn ScheduledJobLocationStore>,
}

impl<TEventStore, TOutbox> ClockInHandler<TEventStore, TOutbox>
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

    #[tracing::instrument(
        skip(self, command),
        fields(time_entry_id = %command.time_entry_id, employee_id = %command.employee_id)
    )]
    pub async fn handle(&self, command: ClockIn) -> Result<Committed, ApplicationError> {
        let schedule = match command.scheduled_job_location_id.as_deref() {
            Some(id) => Some(self.reserve(id).await?),
            None => None,
        };
        let reserved = schedule.as_ref().filter(|s| s.is_open()).map(|s| s.id.clone());

        let stream_id = stream_id_for(&command.time_entry_id);
        let result = self
            .commands
            .execute(&stream_id, |state| {
                decide_clock_in(state, command, schedule.as_ref())
            })
            .await;

        match (&result, reserved) {
            (Ok(_), _) => tracing::info!("clocked in"),
            (Err(_), Some(id)) => self.release(&id).await,
            (Err(_), None) => {}
        }
        result
    }

    /// Claims an open schedule (scheduled -> in_progress) ahead of the append. Returns the
    /// schedule as it was before the claim; one that is no longer open is left for the decision
    /// to refuse.
    async fn reserve(&self, id: &str) -> Result<ScheduledJobLocation, ApplicationError> {
        let schedule = self.schedules.get(id).await?;
        if !schedule.is_open() {
            return Ok(schedule);
        }
        match self
            .schedules
            .swap_status(id, ScheduleStatus::Scheduled, ScheduleStatus::InProgress)
            .await
        {
            Ok(_) => Ok(schedule),
            Err(StoreError::InvalidState(_)) => Ok(self.schedules.get(id).await?),
            Err(error) => Err(error.into()),
        }
    }

    async fn release(&self, id: &str) {
        if let Err(error) = self
            .schedules
            .swap_status(id, ScheduleStatus::InProgress, ScheduleStatus::Scheduled)
            .await
        {
            tracing::warn!(schedule_id = %id, error = %error, "could not release schedule");
        }
    }
}
