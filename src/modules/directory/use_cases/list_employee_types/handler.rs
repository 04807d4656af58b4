use crate::modules::directory::adapters::outbound::stores::EmployeeTypeStore;
use crate::modules::directory::core::employee_type::EmployeeType;
use crate::modules::directory::use_cases::errors::DirectoryError;

pub async fn list_employee_types(
    store: &dyn EmployeeTypeStore,
) -> Result<Vec<EmployeeType>, DirectoryError> {
    Ok(store.list().await?)
}

pub async fn get_employee_type(
    store: &dyn EmployeeTypeStore,
    id: &str,
) -> Result<EmployeeType, DirectoryError> {
    Ok(store.get(id).await?)
}
