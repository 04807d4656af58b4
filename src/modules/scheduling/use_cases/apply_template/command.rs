use chrono::NaiveDate;
use serde::Deserialize;

/// Apply a template over the half-open date range `[start_date, end_date)`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApplyScheduleTemplate {
    pub template_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}
