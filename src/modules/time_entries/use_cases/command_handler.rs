use crate::modules::time_entries::adapters::outbound::intent_outbox::dispatch_intents;
use crate::modules::time_entries::core::decision::{DecideError, Decision};
use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::core::evolve::evolve;
use crate::modules::time_entries::core::state::TimeEntryState;
use crate::shared::core::errors::{Classify, ErrorKind};
use crate::shared::infrastructure::event_store::{EventStore, EventStoreError};
use crate::shared::infrastructure::intent_outbox::{DomainOutbox, OutboxError};
use crate::shared::infrastructure::store::StoreError;
use std::sync::Arc;
use thiserror::Error;

pub fn stream_id_for(time_entry_id: &str) -> String {
    format!("TimeEntry-{time_entry_id}")
}

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    VersionConflict(#[from] EventStoreError),

    #[error(transparent)]
    Outbox(#[from] OutboxError),

    #[error(transparent)]
    Domain(#[from] DecideError),

    #[error(transparent)]
    Schedule(#[from] StoreError),

    #[error("projection failed: {0}")]
    Projection(String),
}

impl Classify for ApplicationError {
    fn kind(&self) -> ErrorKind {
        match self {
            ApplicationError::VersionConflict(e) => e.kind(),
            ApplicationError::Outbox(e) => e.kind(),
            ApplicationError::Domain(e) => e.kind(),
            ApplicationError::Schedule(e) => e.kind(),
            ApplicationError::Projection(_) => ErrorKind::Transient,
        }
    }
}

/// Outcome of an accepted command: the new events and the state they produced.
#[derive(Debug, Clone)]
pub struct Committed {
    pub stream_id: String,
    pub starting_version: i64,
    pub events: Vec<TimeEntryEvent>,
    pub state: TimeEntryState,
}

impl Committed {
    /// Events paired with the stream version each one was written at.
    pub fn versioned_events(&self) -> impl Iterator<Item = (i64, &TimeEntryEvent)> {
        self.events
            .iter()
            .enumerate()
            .map(|(i, event)| (self.starting_version + i as i64 + 1, event))
    }
}

/// Load, decide, append, enqueue. Every time entry command goes through here.
pub struct TimeEntryCommandHandler<TEventStore, TOutbox>
where
    TEventStore: EventStore<TimeEntryEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    topic: String,
    event_store: Arc<TEventStore>,
    outbox: Arc<TOutbox>,
}

impl<TEventStore, TOutbox> TimeEntryCommandHandler<TEventStore, TOutbox>
where
    TEventStore: EventStore<TimeEntryEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    pub fn new(
        topic: impl Into<String>,
        event_store: Arc<TEventStore>,
        outbox: Arc<TOutbox>,
    ) -> Self {
        Self {
            topic: topic.into(),
            event_store,
            outbox,
        }
    }

    pub async fn load_state(
        &self,
        stream_id: &str,
    ) -> Result<(TimeEntryState, i64), ApplicationError> {
        let stream = self.event_store.load(stream_id).await?;
        let state = stream
            .events
            .into_iter()
            .fold(TimeEntryState::None, evolve);
        Ok((state, stream.version))
    }

    pub async fn execute<F>(
        &self,
        stream_id: &str,
        decide: F,
    ) -> Result<Committed, ApplicationError>
    where
        F: FnOnce(&TimeEntryState) -> Decision + Send,
    {
        let (state, version) = self.load_state(stream_id).await?;

        match decide(&state) {
            Decision::Accepted { events, intents } => {
                self.event_store.append(stream_id, version, &events).await?;
                dispatch_intents(&*self.outbox, stream_id, version, &self.topic, intents).await?;
                let state = events.iter().cloned().fold(state, evolve);
                tracing::debug!(
                    stream_id,
                    version,
                    appended = events.len(),
                    "time entry command accepted"
                );
                Ok(Committed {
                    stream_id: stream_id.to_string(),
                    starting_version: version,
                    events,
                    state,
                })
            }
            Decision::Rejected { reason } => {
                tracing::debug!(stream_id, %reason, "time entry command rejected");
                Err(ApplicationError::Domain(reason))
            }
        }
    }
}
