use crate::modules::scheduling::core::schedule_status::ScheduleStatus;
use crate::modules::scheduling::core::scheduled_job_location::ScheduledJobLocation;
use crate::modules::scheduling::core::shift::ScheduledShift;
use crate::modules::scheduling::core::template::ScheduleTemplate;
use crate::shared::infrastructure::store::StoreError;
use async_trait::async_trait;
use chrono::NaiveDate;

#[async_trait]
pub trait ScheduleTemplateStore: Send + Sync {
    async fn list(&self) -> Result<Vec<ScheduleTemplate>, StoreError>;
    async fn get(&self, id: &str) -> Result<ScheduleTemplate, StoreError>;
    async fn insert(&self, template: ScheduleTemplate) -> Result<(), StoreError>;
    /// Replaces an existing template; `NotFound` when the id is unknown.
    async fn replace(&self, template: ScheduleTemplate) -> Result<(), StoreError>;
    async fn remove(&self, id: &str) -> Result<(), StoreError>;
}

/// Filter for listing scheduled shifts. Bounds are inclusive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShiftFilter {
    pub job_location_id: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl ShiftFilter {
    pub fn matches(&self, shift: &ScheduledShift) -> bool {
        self.job_location_id
            .as_deref()
            .is_none_or(|id| shift.job_location_id == id)
            && self.from.is_none_or(|from| shift.date >= from)
            && self.to.is_none_or(|to| shift.date <= to)
    }
}

#[async_trait]
pub trait ScheduledShiftStore: Send + Sync {
    /// Inserts or overwrites by shift id.
    async fn upsert_many(&self, shifts: &[ScheduledShift]) -> Result<(), StoreError>;
    async fn list(&self, filter: &ShiftFilter) -> Result<Vec<ScheduledShift>, StoreError>;
}

#[async_trait]
pub trait ScheduledJobLocationStore: Send + Sync {
    async fn list(&self) -> Result<Vec<ScheduledJobLocation>, StoreError>;
    async fn get(&self, id: &str) -> Result<ScheduledJobLocation, StoreError>;
    async fn put(&self, schedule: ScheduledJobLocation) -> Result<(), StoreError>;
    /// Sets `next` only while the stored status is still `expected`; `InvalidState` otherwise.
    async fn swap_status(
        &self,
        id: &str,
        expected: ScheduleStatus,
        next: ScheduleStatus,
    ) -> Result<ScheduledJobLocation, StoreError>;
}
