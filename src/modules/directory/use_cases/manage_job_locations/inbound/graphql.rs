use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::directory::core::job_location::JobLocation;
use crate::modules::directory::use_cases::manage_job_locations::handler::list_job_locations;
use crate::shared::infrastructure::graphql_error::gql_error;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlJobLocation {
    pub id: String,
    pub name: String,
    /// `name - city, state`, the label time entries record.
    pub display_name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub is_active: bool,
}

impl From<JobLocation> for GqlJobLocation {
    fn from(location: JobLocation) -> Self {
        Self {
            display_name: location.display_name(),
            id: location.id,
            name: location.name,
            address: location.address,
            city: location.city,
            state: location.state,
            zip: location.zip,
            is_active: location.is_active,
        }
    }
}

#[derive(Default)]
pub struct JobLocationQuery;

#[Object]
impl JobLocationQuery {
    async fn job_locations(
        &self,
        context: &Context<'_>,
        active_only: Option<bool>,
    ) -> GqlResult<Vec<GqlJobLocation>> {
        let state = context.data_unchecked::<AppState>();
        let locations = list_job_locations(&*state.job_locations, active_only.unwrap_or(false))
            .await
            .map_err(gql_error)?;
        Ok(locations.into_iter().map(Into::into).collect())
    }
}
