use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::scheduling::core::day_of_week::DayOfWeek;
use crate::modules::scheduling::core::template::{ScheduleTemplate, TemplateShift};
use crate::modules::scheduling::use_cases::manage_templates::handler::list_templates;
use crate::shared::core::clock_time;
use crate::shared::infrastructure::graphql_error::gql_error;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlTemplateShift {
    pub day_of_week: DayOfWeek,
    /// `HH:MM`
    pub start_time: String,
    pub end_time: String,
    pub employee_type_id: String,
    pub number_of_employees: u32,
}

impl From<TemplateShift> for GqlTemplateShift {
    fn from(shift: TemplateShift) -> Self {
        Self {
            day_of_week: shift.day_of_week,
            start_time: clock_time::format(&shift.start_time),
            end_time: clock_time::format(&shift.end_time),
            employee_type_id: shift.employee_type_id,
            number_of_employees: shift.number_of_employees,
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlScheduleTemplate {
    pub id: String,
    pub name: String,
    pub job_location_id: String,
    pub shifts: Vec<GqlTemplateShift>,
}

impl From<ScheduleTemplate> for GqlScheduleTemplate {
    fn from(template: ScheduleTemplate) -> Self {
        Self {
            id: template.id,
            name: template.name,
            job_location_id: template.job_location_id,
            shifts: template.shifts.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Default)]
pub struct ScheduleTemplateQuery;

#[Object]
impl ScheduleTemplateQuery {
    async fn schedule_templates(
        &self,
        context: &Context<'_>,
    ) -> GqlResult<Vec<GqlScheduleTemplate>> {
        let state = context.data_unchecked::<AppState>();
        let templates = list_templates(&*state.templates).await.map_err(gql_error)?;
        Ok(templates.into_iter().map(Into::into).collect())
    }
}
