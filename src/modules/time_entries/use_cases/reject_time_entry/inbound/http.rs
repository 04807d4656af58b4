use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::Response,
};
use serde::Deserialize;

use crate::modules::time_entries::adapters::inbound::http::committed_response;
use crate::modules::time_entries::use_cases::reject_time_entry::command::RejectTimeEntry;
use crate::shared::core::primitives::now_millis;
use crate::shared::infrastructure::actor::Actor;
use crate::shared::infrastructure::http_error::invalid_body;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct RejectTimeEntryBody {
    #[serde(default)]
    pub reason: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(time_entry_id): Path<String>,
    Actor(actor): Actor,
    body: Result<Json<RejectTimeEntryBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return invalid_body(rejection),
    };

    let command = RejectTimeEntry {
        time_entry_id,
        reason: body.reason,
        occurred_at: now_millis(),
        actor,
    };
    let result = state.time_entries.reject(command).await;
    committed_response(&state, result, StatusCode::OK).await
}
