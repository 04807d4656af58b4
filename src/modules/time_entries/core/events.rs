pub mod v1 {
    pub mod time_entry_approved;
    pub mod time_entry_clocked_in;
    pub mod time_entry_clocked_out;
    pub mod time_entry_deleted;
    pub mod time_entry_edited;
    pub mod time_entry_rejected;
    pub mod time_entry_submitted;
}

use v1::{
    time_entry_approved::TimeEntryApprovedV1, time_entry_clocked_in::TimeEntryClockedInV1,
    time_entry_clocked_out::TimeEntryClockedOutV1, time_entry_deleted::TimeEntryDeletedV1,
    time_entry_edited::TimeEntryEditedV1, time_entry_rejected::TimeEntryRejectedV1,
    time_entry_submitted::TimeEntrySubmittedV1,
};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum TimeEntryEvent {
    TimeEntryClockedInV1(TimeEntryClockedInV1),
    TimeEntryClockedOutV1(TimeEntryClockedOutV1),
    TimeEntryEditedV1(TimeEntryEditedV1),
    TimeEntrySubmittedV1(TimeEntrySubmittedV1),
    TimeEntryApprovedV1(TimeEntryApprovedV1),
    TimeEntryRejectedV1(TimeEntryRejectedV1),
    TimeEntryDeletedV1(TimeEntryDeletedV1),
}

impl TimeEntryEvent {
    pub fn occurred_at(&self) -> i64 {
        match self {
            TimeEntryEvent::TimeEntryClockedInV1(e) => e.occurred_at,
            TimeEntryEvent::TimeEntryClockedOutV1(e) => e.occurred_at,
            TimeEntryEvent::TimeEntryEditedV1(e) => e.occurred_at,
            TimeEntryEvent::TimeEntrySubmittedV1(e) => e.occurred_at,
            TimeEntryEvent::TimeEntryApprovedV1(e) => e.occurred_at,
            TimeEntryEvent::TimeEntryRejectedV1(e) => e.occurred_at,
            TimeEntryEvent::TimeEntryDeletedV1(e) => e.occurred_at,
        }
    }

    pub fn actor(&self) -> &str {
        match self {
            TimeEntryEvent::TimeEntryClockedInV1(e) => &e.actor,
            TimeEntryEvent::TimeEntryClockedOutV1(e) => &e.actor,
            TimeEntryEvent::TimeEntryEditedV1(e) => &e.actor,
            TimeEntryEvent::TimeEntrySubmittedV1(e) => &e.actor,
            TimeEntryEvent::TimeEntryApprovedV1(e) => &e.actor,
            TimeEntryEvent::TimeEntryRejectedV1(e) => &e.actor,
            TimeEntryEvent::TimeEntryDeletedV1(e) => &e.actor,
        }
    }
}
