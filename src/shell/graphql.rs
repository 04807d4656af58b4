use async_graphql::{EmptySubscription, MergedObject, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, response::Html};

use crate::modules::directory::use_cases::list_employee_types::inbound::graphql::EmployeeTypeQuery;
use crate::modules::directory::use_cases::manage_job_locations::inbound::graphql::JobLocationQuery;
use crate::modules::scheduling::use_cases::apply_template::inbound::graphql::ApplyTemplateMutation;
use crate::modules::scheduling::use_cases::manage_templates::inbound::graphql::ScheduleTemplateQuery;
use crate::modules::time_entries::use_cases::approve_time_entry::inbound::graphql::ApproveTimeEntryMutation;
use crate::modules::time_entries::use_cases::bulk_approve_time_entries::inbound::graphql::BulkApproveMutation;
use crate::modules::time_entries::use_cases::list_time_entries::inbound::graphql::TimeEntryQuery;
use crate::modules::time_entries::use_cases::reject_time_entry::inbound::graphql::RejectTimeEntryMutation;
use crate::modules::time_entries::use_cases::submit_time_entry::inbound::graphql::SubmitTimeEntryMutation;
use crate::shared::infrastructure::actor::Actor;
use crate::shell::state::AppState;

pub const GRAPHQL_PATH: &str = "/gql";

#[derive(MergedObject, Default)]
pub struct QueryRoot(
    TimeEntryQuery,
    ScheduleTemplateQuery,
    JobLocationQuery,
    EmployeeTypeQuery,
);

#[derive(MergedObject, Default)]
pub struct MutationRoot(
    SubmitTimeEntryMutation,
    ApproveTimeEntryMutation,
    RejectTimeEntryMutation,
    BulkApproveMutation,
    ApplyTemplateMutation,
);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(state)
    .finish()
}

pub async fn graphql(
    Extension(schema): Extension<AppSchema>,
    actor: Actor,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner().data(actor)).await.into()
}

pub async fn graphiql() -> Html<String> {
    use async_graphql::http::GraphiQLSource;
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}
