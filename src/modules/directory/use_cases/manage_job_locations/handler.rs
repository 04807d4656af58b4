use crate::modules::directory::adapters::outbound::stores::JobLocationStore;
use crate::modules::directory::core::job_location::{JobLocation, JobLocationDraft};
use crate::modules::directory::use_cases::errors::DirectoryError;
use crate::shared::core::primitives::new_id;

pub async fn list_job_locations(
    store: &dyn JobLocationStore,
    active_only: bool,
) -> Result<Vec<JobLocation>, DirectoryError> {
    let mut locations = store.list().await?;
    if active_only {
        locations.retain(|l| l.is_active);
    }
    Ok(locations)
}

pub async fn get_job_location(
    store: &dyn JobLocationStore,
    id: &str,
) -> Result<JobLocation, DirectoryError> {
    Ok(store.get(id).await?)
}

/// New locations start out active.
#[tracing::instrument(skip(store, draft), fields(name = %draft.name))]
pub async fn create_job_location(
    store: &dyn JobLocationStore,
    draft: JobLocationDraft,
) -> Result<JobLocation, DirectoryError> {
    draft.validate()?;
    let location = JobLocation::from_draft(new_id(), draft, true);
    store.insert(location.clone()).await?;
    tracing::info!(job_location_id = %location.id, "job location created");
    Ok(location)
}

#[tracing::instrument(skip(store, draft))]
pub async fn update_job_location(
    store: &dyn JobLocationStore,
    id: &str,
    draft: JobLocationDraft,
) -> Result<JobLocation, DirectoryError> {
    draft.validate()?;
    let current = store.get(id).await?;
    let location = JobLocation::from_draft(id, draft, current.is_active);
    store.replace(location.clone()).await?;
    tracing::info!("job location updated");
    Ok(location)
}

#[tracing::instrument(skip(store))]
pub async fn set_job_location_active(
    store: &dyn JobLocationStore,
    id: &str,
    is_active: bool,
) -> Result<JobLocation, DirectoryError> {
    let location = JobLocation {
        is_active,
        ..store.get(id).await?
    };
    store.replace(location.clone()).await?;
    tracing::info!("job location activation changed");
    Ok(location)
}
