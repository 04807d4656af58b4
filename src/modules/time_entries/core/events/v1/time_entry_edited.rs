use serde::{Deserialize, Serialize};

/// Who changed the entry. Employees may only touch their drafts; managers also fix pending ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Editor {
    Employee,
    Manager,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimeEntryEditedV1 {
    pub time_entry_id: String,
    pub editor: Editor,
    pub start_time: i64,
    pub end_time: i64,
    pub job_location: String,
    pub description: String,
    pub total_hours: f64,
    pub manager_notes: Option<String>,
    pub occurred_at: i64,
    pub actor: String,
}
