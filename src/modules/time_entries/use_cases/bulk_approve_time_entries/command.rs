#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkApproveTimeEntries {
    pub time_entry_ids: Vec<String>,
    pub note: Option<String>,
    pub occurred_at: i64,
    pub actor: String,
}

impl BulkApproveTimeEntries {
    /// Requested ids in request order, blanks and repeats dropped.
    pub fn distinct_ids(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        self.time_entry_ids
            .iter()
            .map(|id| id.trim())
            .filter(|id| !id.is_empty() && seen.insert(*id))
            .collect()
    }
}
