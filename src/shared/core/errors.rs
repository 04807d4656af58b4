use serde::Serialize;

/// Coarse classification every application error maps onto, so inbound adapters can tell a
/// caller whether to fix the input, refresh its view, or simply retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Validation,
    NotFound,
    InvalidState,
    Transient,
    Fatal,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Validation => "validation",
            ErrorKind::NotFound => "not_found",
            ErrorKind::InvalidState => "invalid_state",
            ErrorKind::Transient => "transient",
            ErrorKind::Fatal => "fatal",
        }
    }

    pub fn is_retryable(self) -> bool {
        matches!(self, ErrorKind::Transient)
    }
}

pub trait Classify {
    fn kind(&self) -> ErrorKind;
}
