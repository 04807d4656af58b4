// Opens a time entry in draft status. All i64 instants are epoch milliseconds.

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct TimeEntryClockedInV1 {
    pub time_entry_id: String,
    pub employee_id: String,
    pub start_time: i64,
    pub job_location: String,
    pub scheduled_job_location_id: Option<String>,
    pub description: String,
    pub occurred_at: i64,
    pub actor: String,
}
