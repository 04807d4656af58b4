#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockOut {
    pub time_entry_id: String,
    pub end_time: i64,
    pub occurred_at: i64,
    pub actor: String,
}
