use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Response,
};
use serde::Deserialize;

use crate::modules::time_entries::adapters::inbound::http::committed_response;
use crate::modules::time_entries::use_cases::clock_in::command::ClockIn;
use crate::shared::core::primitives::{new_id, now_millis};
use crate::shared::infrastructure::actor::Actor;
use crate::shared::infrastructure::http_error::invalid_body;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ClockInBody {
    pub employee_id: String,
    #[serde(default)]
    pub job_location: String,
    pub scheduled_job_location_id: Option<String>,
    pub description: Option<String>,
    pub start_time: Option<i64>,
}

pub async fn handle(
    State(state): State<AppState>,
    Actor(actor): Actor,
    body: Result<Json<ClockInBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return invalid_body(rejection),
    };

    let now = now_millis();
    let command = ClockIn {
        time_entry_id: new_id(),
        employee_id: body.employee_id,
        job_location: body.job_location,
        scheduled_job_location_id: body.scheduled_job_location_id,
        description: body.description,
        start_time: body.start_time.unwrap_or(now),
        occurred_at: now,
        actor,
    };

    let result = state.clock_in.handle(command).await;
    committed_response(&state, result, StatusCode::CREATED).await
}
