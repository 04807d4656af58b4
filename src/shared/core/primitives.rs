use chrono::Utc;
use uuid::Uuid;

/// All instants in the time entry domain are epoch milliseconds.
pub type EpochMillis = i64;

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

pub fn now_millis() -> EpochMillis {
    Utc::now().timestamp_millis()
}

pub fn new_id() -> String {
    Uuid::now_v7().to_string()
}

/// Worked hours between two instants, rounded to two decimals. `None` unless `end` is after
/// `start` by a representable span.
pub fn hours_between(start: EpochMillis, end: EpochMillis) -> Option<f64> {
    let span = end.checked_sub(start).filter(|span| *span > 0)?;
    let hours = span as f64 / MILLIS_PER_HOUR;
    Some((hours * 100.0).round() / 100.0)
}

/// Trims free text and maps blank input to `None`.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
