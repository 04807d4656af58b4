use crate::modules::directory::adapters::outbound::stores::{EmployeeTypeStore, JobLocationStore};
use crate::modules::directory::adapters::outbound::stores_in_memory::{
    InMemoryEmployeeTypes, InMemoryJobLocations,
};
use crate::modules::scheduling::adapters::outbound::stores::{
    ScheduleTemplateStore, ScheduledJobLocationStore, ScheduledShiftStore,
};
use crate::modules::scheduling::adapters::outbound::stores_in_memory::{
    InMemoryScheduleTemplates, InMemoryScheduledJobLocations, InMemoryScheduledShifts,
};
use crate::modules::time_entries::adapters::outbound::projections_in_memory::InMemoryProjections;
use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::use_cases::clock_in::handler::ClockInHandler;
use crate::modules::time_entries::use_cases::clock_out::handler::ClockOutHandler;
use crate::modules::time_entries::use_cases::command_handler::{
    ApplicationError, Committed, TimeEntryCommandHandler,
};
use crate::modules::time_entries::use_cases::list_time_entries::handler::Projector;
use crate::modules::time_entries::use_cases::list_time_entries::queries_port::TimeEntryQueries;
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use crate::shared::infrastructure::intent_outbox::in_memory::InMemoryDomainOutbox;
use crate::shell::seed::SeedData;
use std::sync::Arc;

pub type TimeEntryStore = InMemoryEventStore<TimeEntryEvent>;
pub type TimeEntryCommands = TimeEntryCommandHandler<TimeEntryStore, InMemoryDomainOutbox>;

const PROJECTOR_NAME: &str = "time_entry_summary";

#[derive(Clone)]
pub struct AppState {
    pub queries: Arc<dyn TimeEntryQueries + Send + Sync>,
    pub time_entries: Arc<TimeEntryCommands>,
    pub clock_in: Arc<ClockInHandler<TimeEntryStore, InMemoryDomainOutbox>>,
    pub clock_out: Arc<ClockOutHandler<TimeEntryStore, InMemoryDomainOutbox>>,
    pub event_store: Arc<TimeEntryStore>,
    pub outbox: Arc<InMemoryDomainOutbox>,
    pub projector: Arc<Projector<InMemoryProjections, InMemoryProjections>>,
    pub templates: Arc<dyn ScheduleTemplateStore>,
    pub shifts: Arc<dyn ScheduledShiftStore>,
    pub schedules: Arc<dyn ScheduledJobLocationStore>,
    pub job_locations: Arc<dyn JobLocationStore>,
    pub employee_types: Arc<dyn EmployeeTypeStore>,
}

impl AppState {
    pub fn in_memory(topic: &str, seed: SeedData) -> Self {
        Self::with_event_store(topic, TimeEntryStore::new(), seed)
    }

    pub fn with_event_store(topic: &str, event_store: TimeEntryStore, seed: SeedData) -> Self {
        let event_store = Arc::new(event_store);
        let outbox = Arc::new(InMemoryDomainOutbox::new());
        let projections = Arc::new(InMemoryProjections::new());
        let projector = Arc::new(Projector::new(
            PROJECTOR_NAME,
            projections.clone(),
            projections.clone(),
        ));
        let schedules: Arc<dyn ScheduledJobLocationStore> = Arc::new(
            InMemoryScheduledJobLocations::with_schedules(seed.scheduled_job_locations),
        );
        let time_entries = Arc::new(TimeEntryCommandHandler::new(
            topic,
            event_store.clone(),
            outbox.clone(),
        ));

        Self {
            queries: projections,
            clock_in: Arc::new(ClockInHandler::new(time_entries.clone(), schedules.clone())),
            clock_out: Arc::new(ClockOutHandler::new(time_entries.clone(), schedules.clone())),
            time_entries,
            event_store,
            outbox,
            projector,
            templates: Arc::new(InMemoryScheduleTemplates::with_templates(
                seed.schedule_templates,
            )),
            shifts: Arc::new(InMemoryScheduledShifts::new()),
            schedules,
            job_locations: Arc::new(InMemoryJobLocations::with_locations(seed.job_locations)),
            employee_types: Arc::new(InMemoryEmployeeTypes::with_types(seed.employee_types)),
        }
    }

    /// Inline projection so queries see a command's effect immediately.
    pub async fn project(&self, committed: &Committed) -> Result<(), ApplicationError> {
        for (version, event) in committed.versioned_events() {
            self.projector
                .apply_one(&committed.stream_id, version, event)
                .await
                .map_err(|e| ApplicationError::Projection(e.to_string()))?;
        }
        Ok(())
    }

    /// Projects several commits that are already durable. A failure is logged and the remaining
    /// commits are still projected; the callers report per-item outcomes regardless.
    pub async fn project_each(&self, committed: &[Committed]) {
        for commit in committed {
            if let Err(error) = self.project(commit).await {
                tracing::warn!(
                    stream_id = %commit.stream_id,
                    error = %error,
                    "committed change not projected"
                );
            }
        }
    }
}
