use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::Response,
};
use serde::Deserialize;

use crate::modules::time_entries::adapters::inbound::http::committed_response;
use crate::modules::time_entries::use_cases::approve_time_entry::command::ApproveTimeEntry;
use crate::shared::core::primitives::now_millis;
use crate::shared::infrastructure::actor::Actor;
use crate::shared::infrastructure::http_error::invalid_body;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ApproveTimeEntryBody {
    pub note: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(time_entry_id): Path<String>,
    Actor(actor): Actor,
    body: Result<Json<ApproveTimeEntryBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return invalid_body(rejection),
    };

    let command = ApproveTimeEntry {
        time_entry_id,
        note: body.note,
        occurred_at: now_millis(),
        actor,
    };
    let result = state.time_entries.approve(command).await;
    committed_response(&state, result, StatusCode::OK).await
}
