use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::modules::scheduling::use_cases::apply_template::command::ApplyScheduleTemplate;
use crate::modules::scheduling::use_cases::apply_template::handler::apply_template;
use crate::shared::infrastructure::http_error::{error_response, invalid_body};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ApplyTemplateBody {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(template_id): Path<String>,
    body: Result<Json<ApplyTemplateBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return invalid_body(rejection),
    };
    let command = ApplyScheduleTemplate {
        template_id,
        start_date: body.start_date,
        end_date: body.end_date,
    };
    match apply_template(&*state.templates, &*state.shifts, command).await {
        Ok(shifts) => Json(shifts).into_response(),
        Err(e) => error_response(&e),
    }
}
