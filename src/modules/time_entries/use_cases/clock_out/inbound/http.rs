use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::Response,
};
use serde::Deserialize;

use crate::modules::time_entries::adapters::inbound::http::committed_response;
use crate::modules::time_entries::use_cases::clock_out::command::ClockOut;
use crate::shared::core::primitives::now_millis;
use crate::shared::infrastructure::actor::Actor;
use crate::shared::infrastructure::http_error::invalid_body;
use crate::shell::state::AppState;

#[derive(Deserialize, Default)]
pub struct ClockOutBody {
    /// Defaults to now.
    pub end_time: Option<i64>,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(time_entry_id): Path<String>,
    Actor(actor): Actor,
    body: Result<Json<ClockOutBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return invalid_body(rejection),
    };

    let now = now_millis();
    let command = ClockOut {
        time_entry_id,
        end_time: body.end_time.unwrap_or(now),
        occurred_at: now,
        actor,
    };

    let result = state.clock_out.handle(command).await;
    committed_response(&state, result, StatusCode::OK).await
}
