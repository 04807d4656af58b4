#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq)]
pub struct TimeEntryClockedOutV1 {
    pub time_entry_id: String,
    pub end_time: i64,
    pub total_hours: f64,
    pub occurred_at: i64,
    pub actor: String,
}
