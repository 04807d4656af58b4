#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApproveTimeEntry {
    pub time_entry_id: String,
    pub note: Option<String>,
    pub occurred_at: i64,
    pub actor: String,
}
