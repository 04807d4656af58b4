use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::core::status::TimeEntryStatus;
use crate::modules::time_entries::use_cases::list_time_entries::projection::TimeEntryRow;

#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    Upsert(TimeEntryRow),
    Delete { time_entry_id: String },
}

/// Computes the read-model changes for one event, given the row as it currently stands.
/// Events for a row that was never projected produce nothing.
pub fn apply(
    current: Option<&TimeEntryRow>,
    stream_id: &str,
    version: i64,
    event: &TimeEntryEvent,
) -> Vec<Mutation> {
    let stream_key = format!("{stream_id}:{version}");

    if let TimeEntryEvent::TimeEntryClockedInV1(details) = event {
        return vec![Mutation::Upsert(TimeEntryRow {
            time_entry_id: details.time_entry_id.clone(),
            employee_id: details.employee_id.clone(),
            start_time: details.start_time,
            end_time: None,
            job_location: details.job_location.clone(),
            scheduled_job_location_id: details.scheduled_job_location_id.clone(),
            description: details.description.clone(),
            status: TimeEntryStatus::Draft,
            total_hours: None,
            manager_notes: None,
            rejection_reason: None,
            created_at: details.occurred_at,
            created_by: details.actor.clone(),
            updated_at: details.occurred_at,
            updated_by: details.actor.clone(),
            last_event_id: Some(stream_key),
        })];
    }

    let Some(current) = current else {
        return vec![];
    };
    let mut row = current.clone();

    match event {
        TimeEntryEvent::TimeEntryClockedInV1(_) => return vec![],
        TimeEntryEvent::TimeEntryDeletedV1(details) => {
            return vec![Mutation::Delete {
                time_entry_id: details.time_entry_id.clone(),
            }];
        }
        TimeEntryEvent::TimeEntryClockedOutV1(details) => {
            row.end_time = Some(details.end_time);
            row.total_hours = Some(details.total_hours);
        }
        TimeEntryEvent::TimeEntryEditedV1(details) => {
            row.start_time = details.start_time;
            row.end_time = Some(details.end_time);
            row.job_location = details.job_location.clone();
            row.description = details.description.clone();
            row.total_hours = Some(details.total_hours);
            if details.manager_notes.is_some() {
                row.manager_notes = details.manager_notes.clone();
            }
        }
        TimeEntryEvent::TimeEntrySubmittedV1(_) => row.status = TimeEntryStatus::Pending,
        TimeEntryEvent::TimeEntryApprovedV1(details) => {
            row.status = TimeEntryStatus::Approved;
            if details.note.is_some() {
                row.manager_notes = details.note.clone();
            }
        }
        TimeEntryEvent::TimeEntryRejectedV1(details) => {
            row.status = TimeEntryStatus::Rejected;
            row.rejection_reason = Some(details.reason.clone());
        }
    }

    row.updated_at = event.occurred_at();
    row.updated_by = event.actor().to_string();
    row.last_event_id = Some(stream_key);
    vec![Mutation::Upsert(row)]
}
