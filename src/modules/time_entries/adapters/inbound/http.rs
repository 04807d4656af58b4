use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::modules::time_entries::use_cases::command_handler::{ApplicationError, Committed};
use crate::modules::time_entries::use_cases::list_time_entries::projection::TimeEntryView;
use crate::shared::infrastructure::http_error::error_response;
use crate::shell::state::AppState;

/// Projects an accepted command and answers with the entry as it now stands.
/// A deleted entry has nothing left to show and answers 204.
pub async fn committed_response(
    state: &AppState,
    result: Result<Committed, ApplicationError>,
    status: StatusCode,
) -> Response {
    let committed = match result {
        Ok(committed) => committed,
        Err(e) => return error_response(&e),
    };
    if let Err(e) = state.project(&committed).await {
        return error_response(&e);
    }
    match committed.state.entry() {
        Some(entry) => (status, Json(TimeEntryView::from(entry))).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}
