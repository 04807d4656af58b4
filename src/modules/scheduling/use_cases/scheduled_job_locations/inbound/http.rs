use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::modules::scheduling::core::schedule_status::ScheduleStatus;
use crate::modules::scheduling::use_cases::scheduled_job_locations::handler::{
    list_schedules, schedules_after, schedules_on, update_schedule_status,
};
use crate::shared::infrastructure::http_error::{error_response, invalid_body};
use crate::shell::state::AppState;

/// `day` wins over `upcoming_after` when both are given.
#[derive(Deserialize)]
pub struct ListSchedulesParams {
    pub day: Option<NaiveDate>,
    pub upcoming_after: Option<NaiveDate>,
}

pub async fn handle_list(
    State(state): State<AppState>,
    Query(params): Query<ListSchedulesParams>,
) -> Response {
    let store = &*state.schedules;
    let result = match (params.day, params.upcoming_after) {
        (Some(day), _) => schedules_on(store, day).await,
        (None, Some(after)) => schedules_after(store, after).await,
        (None, None) => list_schedules(store).await,
    };
    match result {
        Ok(schedules) => Json(schedules).into_response(),
        Err(e) => error_response(&e),
    }
}

#[derive(Deserialize)]
pub struct UpdateStatusBody {
    pub status: ScheduleStatus,
}

pub async fn handle_update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<UpdateStatusBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return invalid_body(rejection),
    };
    match update_schedule_status(&*state.schedules, &id, body.status).await {
        Ok(schedule) => Json(schedule).into_response(),
        Err(e) => error_response(&e),
    }
}
