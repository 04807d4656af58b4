use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::modules::directory::core::job_location::JobLocationDraft;
use crate::modules::directory::use_cases::manage_job_locations::handler::{
    create_job_location, list_job_locations, set_job_location_active, update_job_location,
};
use crate::shared::infrastructure::http_error::{error_response, invalid_body};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ListJobLocationsParams {
    #[serde(default)]
    pub active_only: bool,
}

pub async fn handle_list(
    State(state): State<AppState>,
    Query(params): Query<ListJobLocationsParams>,
) -> Response {
    match list_job_locations(&*state.job_locations, params.active_only).await {
        Ok(locations) => Json(locations).into_response(),
        Err(e) => error_response(&e),
    }
}

pub async fn handle_create(
    State(state): State<AppState>,
    body: Result<Json<JobLocationDraft>, JsonRejection>,
) -> Response {
    let Json(draft) = match body {
        Ok(b) => b,
        Err(rejection) => return invalid_body(rejection),
    };
    match create_job_location(&*state.job_locations, draft).await {
        Ok(location) => (StatusCode::CREATED, Json(location)).into_response(),
        Err(e) => error_response(&e),
    }
}

pub async fn handle_update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<JobLocationDraft>, JsonRejection>,
) -> Response {
    let Json(draft) = match body {
        Ok(b) => b,
        Err(rejection) => return invalid_body(rejection),
    };
    match update_job_location(&*state.job_locations, &id, draft).await {
        Ok(location) => Json(location).into_response(),
        Err(e) => error_response(&e),
    }
}

#[derive(Deserialize)]
pub struct SetActiveBody {
    pub is_active: bool,
}

pub async fn handle_set_active(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<SetActiveBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return invalid_body(rejection),
    };
    match set_job_location_active(&*state.job_locations, &id, body.is_active).await {
        Ok(location) => Json(location).into_response(),
        Err(e) => error_response(&e),
    }
}
