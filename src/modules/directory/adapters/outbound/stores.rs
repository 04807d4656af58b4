use crate::modules::directory::core::employee_type::EmployeeType;
use crate::modules::directory::core::job_location::JobLocation;
use crate::shared::infrastructure::store::StoreError;
use async_trait::async_trait;

#[async_trait]
pub trait JobLocationStore: Send + Sync {
    async fn list(&self) -> Result<Vec<JobLocation>, StoreError>;
    async fn get(&self, id: &str) -> Result<JobLocation, StoreError>;
    async fn insert(&self, location: JobLocation) -> Result<(), StoreError>;
    /// Replaces an existing location; `NotFound` when the id is unknown.
    async fn replace(&self, location: JobLocation) -> Result<(), StoreError>;
}

#[async_trait]
pub trait EmployeeTypeStore: Send + Sync {
    async fn list(&self) -> Result<Vec<EmployeeType>, StoreError>;
    async fn get(&self, id: &str) -> Result<EmployeeType, StoreError>;
}
