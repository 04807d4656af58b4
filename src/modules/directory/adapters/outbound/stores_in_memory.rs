use crate::modules::directory::adapters::outbound::stores::{EmployeeTypeStore, JobLocationStore};
use crate::modules::directory::core::employee_type::EmployeeType;
use crate::modules::directory::core::job_location::JobLocation;
use crate::shared::infrastructure::store::StoreError;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryJobLocations {
    locations: RwLock<HashMap<String, JobLocation>>,
    is_offline: bool,
}

impl InMemoryJobLocations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_locations(locations: impl IntoIterator<Item = JobLocation>) -> Self {
        Self {
            locations: RwLock::new(locations.into_iter().map(|l| (l.id.clone(), l)).collect()),
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Unavailable("Job location store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl JobLocationStore for InMemoryJobLocations {
    async fn list(&self) -> Result<Vec<JobLocation>, StoreError> {
        self.ensure_online()?;
        let mut locations: Vec<_> = self.locations.read().await.values().cloned().collect();
        locations.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(locations)
    }

    async fn get(&self, id: &str) -> Result<JobLocation, StoreError> {
        self.ensure_online()?;
        self.locations
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("job location", id))
    }

    async fn insert(&self, location: JobLocation) -> Result<(), StoreError> {
        self.ensure_online()?;
        let mut guard = self.locations.write().await;
        if guard.contains_key(&location.id) {
            return Err(StoreError::InvalidState(format!(
                "job location {} already exists",
                location.id
            )));
        }
        guard.insert(location.id.clone(), location);
        Ok(())
    }

    async fn replace(&self, location: JobLocation) -> Result<(), StoreError> {
        self.ensure_online()?;
        let mut guard = self.locations.write().await;
        match guard.get_mut(&location.id) {
            Some(slot) => {
                *slot = location;
                Ok(())
            }
            None => Err(StoreError::not_found("job location", location.id)),
        }
    }
}

#[derive(Default)]
pub struct InMemoryEmployeeTypes {
    types: RwLock<Vec<EmployeeType>>,
}

impl InMemoryEmployeeTypes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_types(types: impl IntoIterator<Item = EmployeeType>) -> Self {
        Self {
            types: RwLock::new(types.into_iter().collect()),
        }
    }
}

#[async_trait::async_trait]
impl EmployeeTypeStore for InMemoryEmployeeTypes {
    async fn list(&self) -> Result<Vec<EmployeeType>, StoreError> {
        Ok(self.types.read().await.clone())
    }

    async fn get(&self, id: &str) -> Result<EmployeeType, StoreError> {
        self.types
            .read()
            .await
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("employee type", id))
    }
}
