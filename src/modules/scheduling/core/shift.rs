use crate::modules::scheduling::core::schedule_status::ScheduleStatus;
use crate::shared::core::clock_time;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A concrete, dated shift produced by applying a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledShift {
    pub id: String,
    pub template_id: String,
    pub job_location_id: String,
    pub date: NaiveDate,
    #[serde(with = "clock_time")]
    pub start_time: NaiveTime,
    #[serde(with = "clock_time")]
    pub end_time: NaiveTime,
    pub employee_type_id: String,
    pub number_of_employees: u32,
    pub status: ScheduleStatus,
}

impl ScheduledShift {
    /// Stable identity of the `index`-th template shift on `date`.
    pub fn id_for(template_id: &str, date: NaiveDate, index: usize) -> String {
        format!("{template_id}:{date}:{index}")
    }
}
