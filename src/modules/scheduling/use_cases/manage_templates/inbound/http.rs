use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::modules::scheduling::core::template::TemplateDraft;
use crate::modules::scheduling::use_cases::manage_templates::handler::{
    create_template, delete_template, get_template, list_templates, update_template,
};
use crate::shared::infrastructure::http_error::{error_response, invalid_body};
use crate::shell::state::AppState;

pub async fn handle_list(State(state): State<AppState>) -> Response {
    match list_templates(&*state.templates).await {
        Ok(templates) => Json(templates).into_response(),
        Err(e) => error_response(&e),
    }
}

pub async fn handle_get(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match get_template(&*state.templates, &id).await {
        Ok(template) => Json(template).into_response(),
        Err(e) => error_response(&e),
    }
}

pub async fn handle_create(
    State(state): State<AppState>,
    body: Result<Json<TemplateDraft>, JsonRejection>,
) -> Response {
    let Json(draft) = match body {
        Ok(b) => b,
        Err(rejection) => return invalid_body(rejection),
    };
    match create_template(&*state.templates, draft).await {
        Ok(template) => (StatusCode::CREATED, Json(template)).into_response(),
        Err(e) => error_response(&e),
    }
}

pub async fn handle_update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<TemplateDraft>, JsonRejection>,
) -> Response {
    let Json(draft) = match body {
        Ok(b) => b,
        Err(rejection) => return invalid_body(rejection),
    };
    match update_template(&*state.templates, &id, draft).await {
        Ok(template) => Json(template).into_response(),
        Err(e) => error_response(&e),
    }
}

pub async fn handle_delete(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match delete_template(&*state.templates, &id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(&e),
    }
}
