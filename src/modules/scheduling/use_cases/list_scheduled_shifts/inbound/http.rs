use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::modules::scheduling::adapters::outbound::stores::ShiftFilter;
use crate::shared::infrastructure::http_error::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ListShiftsParams {
    pub job_location_id: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl From<ListShiftsParams> for ShiftFilter {
    fn from(params: ListShiftsParams) -> Self {
        ShiftFilter {
            job_location_id: params.job_location_id,
            from: params.from,
            to: params.to,
        }
    }
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<ListShiftsParams>,
) -> Response {
    match state.shifts.list(&params.into()).await {
        Ok(shifts) => Json(shifts).into_response(),
        Err(e) => error_response(&e),
    }
}
