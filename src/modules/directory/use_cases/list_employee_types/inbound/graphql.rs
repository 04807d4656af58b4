use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::directory::core::employee_type::EmployeeType;
use crate::modules::directory::use_cases::list_employee_types::handler::list_employee_types;
use crate::shared::infrastructure::graphql_error::gql_error;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlEmployeeType {
    pub id: String,
    pub name: String,
    pub description: String,
    pub qualifications: Vec<String>,
    pub allowed_job_locations: Vec<String>,
}

impl From<EmployeeType> for GqlEmployeeType {
    fn from(t: EmployeeType) -> Self {
        Self {
            id: t.id,
            name: t.name,
            description: t.description,
            qualifications: t.qualifications,
            allowed_job_locations: t.allowed_job_locations,
        }
    }
}

#[derive(Default)]
pub struct EmployeeTypeQuery;

#[Object]
impl EmployeeTypeQuery {
    async fn employee_types(&self, context: &Context<'_>) -> GqlResult<Vec<GqlEmployeeType>> {
        let state = context.data_unchecked::<AppState>();
        let types = list_employee_types(&*state.employee_types)
            .await
            .map_err(gql_error)?;
        Ok(types.into_iter().map(Into::into).collect())
    }
}
