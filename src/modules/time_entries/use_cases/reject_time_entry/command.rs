#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectTimeEntry {
    pub time_entry_id: String,
    pub reason: String,
    pub occurred_at: i64,
    pub actor: String,
}
