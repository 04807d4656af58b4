use crate::modules::time_entries::core::events::v1::time_entry_edited::Editor;

/// Full replacement of an entry's interval and location. Start, end and location are required;
/// a missing description keeps the current one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditTimeEntry {
    pub time_entry_id: String,
    pub editor: Editor,
    pub start_time: Option<i64>,
    pub end_time: Option<i64>,
    pub job_location: Option<String>,
    pub description: Option<String>,
    pub manager_notes: Option<String>,
    pub occurred_at: i64,
    pub actor: String,
}
