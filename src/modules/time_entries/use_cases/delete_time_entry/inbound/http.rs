use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};

use crate::modules::time_entries::adapters::inbound::http::committed_response;
use crate::modules::time_entries::use_cases::delete_time_entry::command::DeleteTimeEntry;
use crate::shared::core::primitives::now_millis;
use crate::shared::infrastructure::actor::Actor;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(time_entry_id): Path<String>,
    Actor(actor): Actor,
) -> Response {
    let command = DeleteTimeEntry {
        time_entry_id,
        occurred_at: now_millis(),
        actor,
    };
    let result = state.time_entries.delete(command).await;
    committed_response(&state, result, StatusCode::NO_CONTENT).await
}
