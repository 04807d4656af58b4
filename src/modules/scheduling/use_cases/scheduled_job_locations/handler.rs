use crate::modules::scheduling::adapters::outbound::stores::ScheduledJobLocationStore;
use crate::modules::scheduling::core::schedule_status::ScheduleStatus;
use crate::modules::scheduling::core::scheduled_job_location::ScheduledJobLocation;
use crate::shared::infrastructure::store::StoreError;
use chrono::NaiveDate;

pub async fn list_schedules(
    store: &dyn ScheduledJobLocationStore,
) -> Result<Vec<ScheduledJobLocation>, StoreError> {
    store.list().await
}

/// Schedules starting on `day`.
pub async fn schedules_on(
    store: &dyn ScheduledJobLocationStore,
    day: NaiveDate,
) -> Result<Vec<ScheduledJobLocation>, StoreError> {
    let mut schedules = store.list().await?;
    schedules.retain(|schedule| schedule.starts_on(day));
    Ok(schedules)
}

/// Schedules starting strictly after `day`.
pub async fn schedules_after(
    store: &dyn ScheduledJobLocationStore,
    day: NaiveDate,
) -> Result<Vec<ScheduledJobLocation>, StoreError> {
    let mut schedules = store.list().await?;
    schedules.retain(|schedule| schedule.starts_after(day));
    Ok(schedules)
}

#[tracing::instrument(skip(store))]
pub async fn update_schedule_status(
    store: &dyn ScheduledJobLocationStore,
    id: &str,
    status: ScheduleStatus,
) -> Result<ScheduledJobLocation, StoreError> {
    let current = store.get(id).await?;
    let next = current
        .transition(status)
        .map_err(|e| StoreError::InvalidState(e.to_string()))?;
    let next = store.swap_status(id, current.status, next.status).await?;
    tracing::info!(from = %current.status, to = %status, "schedule status updated");
    Ok(next)
}
