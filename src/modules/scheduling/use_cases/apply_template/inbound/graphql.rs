use async_graphql::{Context, ID, Object, Result as GqlResult};
use chrono::NaiveDate;

use crate::modules::scheduling::core::schedule_status::ScheduleStatus;
use crate::modules::scheduling::core::shift::ScheduledShift;
use crate::modules::scheduling::use_cases::apply_template::command::ApplyScheduleTemplate;
use crate::modules::scheduling::use_cases::apply_template::handler::apply_template;
use crate::shared::core::clock_time;
use crate::shared::infrastructure::graphql_error::gql_error;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlScheduledShift {
    pub id: String,
    pub template_id: String,
    pub job_location_id: String,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub employee_type_id: String,
    pub number_of_employees: u32,
    pub status: ScheduleStatus,
}

impl From<ScheduledShift> for GqlScheduledShift {
    fn from(shift: ScheduledShift) -> Self {
        Self {
            id: shift.id,
            template_id: shift.template_id,
            job_location_id: shift.job_location_id,
            date: shift.date,
            start_time: clock_time::format(&shift.start_time),
            end_time: clock_time::format(&shift.end_time),
            employee_type_id: shift.employee_type_id,
            number_of_employees: shift.number_of_employees,
            status: shift.status,
        }
    }
}

#[derive(Default)]
pub struct ApplyTemplateMutation;

#[Object]
impl ApplyTemplateMutation {
    /// Expands the template over `[startDate, endDate)`.
    async fn apply_schedule_template(
        &self,
        context: &Context<'_>,
        template_id: ID,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> GqlResult<Vec<GqlScheduledShift>> {
        let state = context.data_unchecked::<AppState>();
        let command = ApplyScheduleTemplate {
            template_id: template_id.to_string(),
            start_date,
            end_date,
        };
        let shifts = apply_template(&*state.templates, &*state.shifts, command)
            .await
            .map_err(gql_error)?;
        Ok(shifts.into_iter().map(Into::into).collect())
    }
}
