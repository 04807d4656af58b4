#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockIn {
    pub time_entry_id: String,
    pub employee_id: String,
    pub job_location: String,
    pub scheduled_job_location_id: Option<String>,
    pub description: Option<String>,
    pub start_time: i64,
    pub occurred_at: i64,
    pub actor: String,
}
