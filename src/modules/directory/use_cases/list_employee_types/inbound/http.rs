use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};

use crate::modules::directory::use_cases::list_employee_types::handler::list_employee_types;
use crate::shared::infrastructure::http_error::error_response;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> Response {
    match list_employee_types(&*state.employee_types).await {
        Ok(types) => Json(types).into_response(),
        Err(e) => error_response(&e),
    }
}
