// In memory projection repository and watermark repository.
//
// - Exercises projectors without a database.
// - Stores read model rows keyed by time entry id.
// - Tracks the last processed event per projector.

use crate::modules::time_entries::adapters::outbound::projections::{
    TimeEntryProjectionRepository, WatermarkRepository,
};
use crate::modules::time_entries::core::status::TimeEntryStatus;
use crate::modules::time_entries::use_cases::list_time_entries::projection::{
    TimeEntryRow, TimeEntryView,
};
use crate::modules::time_entries::use_cases::list_time_entries::queries_port::TimeEntryQueries;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryProjections {
    rows: RwLock<HashMap<String, TimeEntryRow>>,
    watermark: RwLock<HashMap<String, String>>,
    is_offline: bool,
}

impl InMemoryProjections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_projections_online(&self) -> anyhow::Result<()> {
        if self.is_offline {
            anyhow::bail!("Projections repository offline");
        }
        Ok(())
    }

    fn ensure_watermark_online(&self) -> anyhow::Result<()> {
        if self.is_offline {
            anyhow::bail!("Watermark repository offline");
        }
        Ok(())
    }

    async fn select<F>(&self, keep: F) -> anyhow::Result<Vec<TimeEntryRow>>
    where
        F: Fn(&TimeEntryRow) -> bool + Send,
    {
        self.ensure_projections_online()?;
        let guard = self.rows.read().await;
        Ok(guard.values().filter(|row| keep(row)).cloned().collect())
    }
}

fn page(items: Vec<TimeEntryRow>, offset: u64, limit: u64) -> Vec<TimeEntryView> {
    items
        .into_iter()
        .skip(offset as usize)
        .take(limit as usize)
        .map(TimeEntryView::from)
        .collect()
}

#[async_trait::async_trait]
impl TimeEntryProjectionRepository for InMemoryProjections {
    async fn find(&self, time_entry_id: &str) -> anyhow::Result<Option<TimeEntryRow>> {
        self.ensure_projections_online()?;
        Ok(self.rows.read().await.get(time_entry_id).cloned())
    }

    async fn upsert(&self, row: TimeEntryRow) -> anyhow::Result<()> {
        self.ensure_projections_online()?;
        let mut guard = self.rows.write().await;
        guard.insert(row.time_entry_id.clone(), row);
        Ok(())
    }

    async fn delete(&self, time_entry_id: &str) -> anyhow::Result<()> {
        self.ensure_projections_online()?;
        self.rows.write().await.remove(time_entry_id);
        Ok(())
    }
}

#[async_trait::async_trait]
impl WatermarkRepository for InMemoryProjections {
    async fn get(&self, name: &str) -> anyhow::Result<Option<String>> {
        self.ensure_watermark_online()?;
        Ok(self.watermark.read().await.get(name).cloned())
    }

    async fn set(&self, name: &str, last: &str) -> anyhow::Result<()> {
        self.ensure_watermark_online()?;
        self.watermark
            .write()
            .await
            .insert(name.to_string(), last.to_string());
        Ok(())
    }
}

#[async_trait::async_trait]
impl TimeEntryQueries for InMemoryProjections {
    async fn list_by_employee_id(
        &self,
        employee_id: &str,
        offset: u64,
        limit: u64,
        sort_by_start_time_desc: bool,
    ) -> anyhow::Result<Vec<TimeEntryView>> {
        let mut items = self.select(|row| row.employee_id == employee_id).await?;
        items.sort_by(|a, b| {
            a.start_time
                .cmp(&b.start_time)
                .then_with(|| a.time_entry_id.cmp(&b.time_entry_id))
        });
        if sort_by_start_time_desc {
            items.reverse();
        }
        Ok(page(items, offset, limit))
    }

    async fn list_by_status(
        &self,
        status: TimeEntryStatus,
        offset: u64,
        limit: u64,
    ) -> anyhow::Result<Vec<TimeEntryView>> {
        let mut items = self.select(|row| row.status == status).await?;
        items.sort_by(|a, b| {
            a.start_time
                .cmp(&b.start_time)
                .then_with(|| a.time_entry_id.cmp(&b.time_entry_id))
        });
        Ok(page(items, offset, limit))
    }

    async fn get(&self, time_entry_id: &str) -> anyhow::Result<Option<TimeEntryView>> {
        Ok(self.find(time_entry_id).await?.map(TimeEntryView::from))
    }
}
