use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::modules::time_entries::use_cases::bulk_approve_time_entries::command::BulkApproveTimeEntries;
use crate::shared::core::primitives::now_millis;
use crate::shared::infrastructure::actor::Actor;
use crate::shared::infrastructure::http_error::invalid_body;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct BulkApproveBody {
    pub time_entry_ids: Vec<String>,
    pub note: Option<String>,
}

/// Always 200 once the body parses; each id carries its own outcome.
pub async fn handle(
    State(state): State<AppState>,
    Actor(actor): Actor,
    body: Result<Json<BulkApproveBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return invalid_body(rejection),
    };

    let command = BulkApproveTimeEntries {
        time_entry_ids: body.time_entry_ids,
        note: body.note,
        occurred_at: now_millis(),
        actor,
    };
    let approval = state.time_entries.bulk_approve(command).await;
    state.project_each(&approval.committed).await;
    Json(approval.items).into_response()
}
