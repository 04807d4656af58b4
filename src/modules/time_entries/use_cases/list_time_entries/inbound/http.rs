use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::modules::time_entries::core::status::TimeEntryStatus;
use crate::shared::infrastructure::http_error::read_model_unavailable;
use crate::shell::state::AppState;

const DEFAULT_LIMIT: u64 = 20;

#[derive(Deserialize)]
pub struct ListTimeEntriesParams {
    pub employee_id: String,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
    pub sort_desc: Option<bool>,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<ListTimeEntriesParams>,
) -> Response {
    match state
        .queries
        .list_by_employee_id(
            &params.employee_id,
            params.offset.unwrap_or(0),
            params.limit.unwrap_or(DEFAULT_LIMIT),
            params.sort_desc.unwrap_or(true),
        )
        .await
    {
        Ok(entries) => Json(entries).into_response(),
        Err(e) => read_model_unavailable(&e),
    }
}

#[derive(Deserialize)]
pub struct ReviewQueueParams {
    pub status: Option<TimeEntryStatus>,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

/// Manager review queue, pending entries by default.
pub async fn handle_review(
    State(state): State<AppState>,
    Query(params): Query<ReviewQueueParams>,
) -> Response {
    match state
        .queries
        .list_by_status(
            params.status.unwrap_or(TimeEntryStatus::Pending),
            params.offset.unwrap_or(0),
            params.limit.unwrap_or(DEFAULT_LIMIT),
        )
        .await
    {
        Ok(entries) => Json(entries).into_response(),
        Err(e) => read_model_unavailable(&e),
    }
}
