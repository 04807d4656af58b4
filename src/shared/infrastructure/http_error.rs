use crate::shared::core::errors::{Classify, ErrorKind};
use axum::{
    Json, extract::rejection::JsonRejection, http::StatusCode, response::IntoResponse,
    response::Response,
};
use serde::Serialize;
use std::fmt::Display;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub kind: ErrorKind,
}

pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Validation => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::InvalidState => StatusCode::CONFLICT,
        ErrorKind::Transient => StatusCode::SERVICE_UNAVAILABLE,
        ErrorKind::Fatal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub fn error_response<E>(error: &E) -> Response
where
    E: Classify + Display,
{
    let kind = error.kind();
    if kind == ErrorKind::Fatal {
        tracing::error!(error = %error, "request failed");
    } else {
        tracing::debug!(error = %error, ?kind, "request rejected");
    }
    (
        status_for(kind),
        Json(ErrorBody {
            error: error.to_string(),
            kind,
        }),
    )
        .into_response()
}

/// Malformed or mistyped request bodies are a validation failure, same as a rule violation.
pub fn invalid_body(rejection: JsonRejection) -> Response {
    tracing::debug!(error = %rejection.body_text(), "request body rejected");
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ErrorBody {
            error: rejection.body_text(),
            kind: ErrorKind::Validation,
        }),
    )
        .into_response()
}

/// Read model failures surface as `anyhow`; the projection store is the only thing behind them.
pub fn read_model_unavailable(error: &anyhow::Error) -> Response {
    tracing::warn!(error = %error, "read model unavailable");
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(ErrorBody {
            error: error.to_string(),
            kind: ErrorKind::Transient,
        }),
    )
        .into_response()
}
