#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteTimeEntry {
    pub time_entry_id: String,
    pub occurred_at: i64,
    pub actor: String,
}
