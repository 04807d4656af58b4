#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct TimeEntrySubmittedV1 {
    pub time_entry_id: String,
    pub occurred_at: i64,
    pub actor: String,
}
