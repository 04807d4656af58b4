use serde::{Deserialize, Serialize};
use std::fmt;

/// Progress of a scheduled job location or shift.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, async_graphql::Enum,
)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleStatus {
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

impl ScheduleStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ScheduleStatus::Scheduled => "scheduled",
            ScheduleStatus::InProgress => "in_progress",
            ScheduleStatus::Completed => "completed",
            ScheduleStatus::Cancelled => "cancelled",
        }
    }

    /// scheduled -> in_progress -> completed, and anything still open may be cancelled.
    pub fn can_transition_to(self, next: ScheduleStatus) -> bool {
        matches!(
            (self, next),
            (ScheduleStatus::Scheduled, ScheduleStatus::InProgress)
                | (ScheduleStatus::InProgress, ScheduleStatus::Completed)
                | (ScheduleStatus::Scheduled, ScheduleStatus::Cancelled)
                | (ScheduleStatus::InProgress, ScheduleStatus::Cancelled)
        )
    }
}

impl fmt::Display for ScheduleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
