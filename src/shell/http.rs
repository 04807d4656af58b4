use axum::{
    Extension, Router,
    routing::{get, post, put},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::directory::use_cases::list_employee_types::inbound::http as employee_types_http;
use crate::modules::directory::use_cases::manage_job_locations::inbound::http as job_locations_http;
use crate::modules::scheduling::use_cases::apply_template::inbound::http as apply_http;
use crate::modules::scheduling::use_cases::list_scheduled_shifts::inbound::http as shifts_http;
use crate::modules::scheduling::use_cases::manage_templates::inbound::http as templates_http;
use crate::modules::scheduling::use_cases::scheduled_job_locations::inbound::http as schedules_http;
use crate::modules::time_entries::use_cases::approve_time_entry::inbound::http as approve_http;
use crate::modules::time_entries::use_cases::bulk_approve_time_entries::inbound::http as bulk_approve_http;
use crate::modules::time_entries::use_cases::clock_in::inbound::http as clock_in_http;
use crate::modules::time_entries::use_cases::clock_out::inbound::http as clock_out_http;
use crate::modules::time_entries::use_cases::delete_time_entry::inbound::http as delete_http;
use crate::modules::time_entries::use_cases::edit_time_entry::inbound::http as edit_http;
use crate::modules::time_entries::use_cases::list_time_entries::inbound::http as list_http;
use crate::modules::time_entries::use_cases::reject_time_entry::inbound::http as reject_http;
use crate::modules::time_entries::use_cases::submit_time_entry::inbound::http as submit_http;
use crate::shell::graphql::{GRAPHQL_PATH, build_schema, graphiql, graphql};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = build_schema(state.clone());

    Router::new()
        .route("/time-entries", get(list_http::handle))
        .route("/time-entries/review", get(list_http::handle_review))
        .route("/time-entries/clock-in", post(clock_in_http::handle))
        .route("/time-entries/bulk-approve", post(bulk_approve_http::handle))
        .route(
            "/time-entries/{id}",
            put(edit_http::handle).delete(delete_http::handle),
        )
        .route("/time-entries/{id}/clock-out", post(clock_out_http::handle))
        .route("/time-entries/{id}/submit", post(submit_http::handle))
        .route("/time-entries/{id}/approve", post(approve_http::handle))
        .route("/time-entries/{id}/reject", post(reject_http::handle))
        .route(
            "/schedule-templates",
            get(templates_http::handle_list).post(templates_http::handle_create),
        )
        .route(
            "/schedule-templates/{id}",
            get(templates_http::handle_get)
                .put(templates_http::handle_update)
                .delete(templates_http::handle_delete),
        )
        .route("/schedule-templates/{id}/apply", post(apply_http::handle))
        .route("/scheduled-shifts", get(shifts_http::handle))
        .route("/scheduled-job-locations", get(schedules_http::handle_list))
        .route(
            "/scheduled-job-locations/{id}/status",
            put(schedules_http::handle_update_status),
        )
        .route(
            "/job-locations",
            get(job_locations_http::handle_list).post(job_locations_http::handle_create),
        )
        .route("/job-locations/{id}", put(job_locations_http::handle_update))
        .route(
            "/job-locations/{id}/active",
            put(job_locations_http::handle_set_active),
        )
        .route("/employee-types", get(employee_types_http::handle))
        .route(GRAPHQL_PATH, get(graphiql).post(graphql))
        .with_state(state)
        .layer(Extension(schema))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
