use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::Response,
};
use serde::Deserialize;

use crate::modules::time_entries::adapters::inbound::http::committed_response;
use crate::modules::time_entries::core::events::v1::time_entry_edited::Editor;
use crate::modules::time_entries::use_cases::edit_time_entry::command::EditTimeEntry;
use crate::shared::core::primitives::now_millis;
use crate::shared::infrastructure::actor::Actor;
use crate::shared::infrastructure::http_error::invalid_body;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct EditTimeEntryBody {
    #[serde(default = "default_editor")]
    pub editor: Editor,
    pub start_time: Option<i64>,
    pub end_time: Option<i64>,
    pub job_location: Option<String>,
    pub description: Option<String>,
    pub manager_notes: Option<String>,
}

fn default_editor() -> Editor {
    Editor::Employee
}

pub async fn handle(
    State(state): State<AppState>,
    Path(time_entry_id): Path<String>,
    Actor(actor): Actor,
    body: Result<Json<EditTimeEntryBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return invalid_body(rejection),
    };

    let command = EditTimeEntry {
        time_entry_id,
        editor: body.editor,
        start_time: body.start_time,
        end_time: body.end_time,
        job_location: body.job_location,
        description: body.description,
        manager_notes: body.manager_notes,
        occurred_at: now_millis(),
        actor,
    };

    let result = state.time_entries.edit(command).await;
    committed_response(&state, result, StatusCode::OK).await
}
