use crate::modules::time_entries::adapters::outbound::projections::{
    TimeEntryProjectionRepository, WatermarkRepository,
};
use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::core::projections::{Mutation, apply};
use std::sync::Arc;

#[derive(Clone)]
pub struct Projector<TRepository, TWatermarkRepository>
where
    TRepository: TimeEntryProjectionRepository + Send + Sync + 'static,
    TWatermarkRepository: WatermarkRepository + Send + Sync + 'static,
{
    pub name: String,
    pub repository: Arc<TRepository>,
    pub watermark_repository: Arc<TWatermarkRepository>,
}

impl<TRepository, TWatermarkRepository> Projector<TRepository, TWatermarkRepository>
where
    TRepository: TimeEntryProjectionRepository + Send + Sync + 'static,
    TWatermarkRepository: WatermarkRepository + Send + Sync + 'static,
{
    pub fn new(
        name: impl Into<String>,
        repository: Arc<TRepository>,
        watermark: Arc<TWatermarkRepository>,
    ) -> Self {
        Self {
            name: name.into(),
            repository,
            watermark_repository: watermark,
        }
    }

    pub async fn apply_one(
        &self,
        stream_id: &str,
        version: i64,
        event: &TimeEntryEvent,
    ) -> anyhow::Result<()> {
        let time_entry_id = stream_id.trim_start_matches("TimeEntry-");
        let current = self.repository.find(time_entry_id).await?;
        let mutations = apply(current.as_ref(), stream_id, version, event);
        if mutations.is_empty() {
            tracing::warn!(stream_id, version, "event has no row to project onto");
        }
        for mutation in mutations {
            match mutation {
                Mutation::Upsert(row) => self.repository.upsert(row).await?,
                Mutation::Delete { time_entry_id } => {
                    self.repository.delete(&time_entry_id).await?
                }
            }
        }
        self.watermark_repository
            .set(&self.name, &format!("{stream_id}:{version}"))
            .await?;
        Ok(())
    }
}
