use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Approval lifecycle of a time entry. Status only moves forward:
/// draft -> pending -> approved | rejected.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, async_graphql::Enum,
)]
#[serde(rename_all = "snake_case")]
pub enum TimeEntryStatus {
    Draft,
    Pending,
    Approved,
    Rejected,
}

impl TimeEntryStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            TimeEntryStatus::Draft => "draft",
            TimeEntryStatus::Pending => "pending",
            TimeEntryStatus::Approved => "approved",
            TimeEntryStatus::Rejected => "rejected",
        }
    }

    pub fn is_final(self) -> bool {
        matches!(self, TimeEntryStatus::Approved | TimeEntryStatus::Rejected)
    }

    pub fn can_transition_to(self, next: TimeEntryStatus) -> bool {
        matches!(
            (self, next),
            (TimeEntryStatus::Draft, TimeEntryStatus::Pending)
                | (TimeEntryStatus::Pending, TimeEntryStatus::Approved)
                | (TimeEntryStatus::Pending, TimeEntryStatus::Rejected)
        )
    }
}

impl fmt::Display for TimeEntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown time entry status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for TimeEntryStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "draft" => Ok(TimeEntryStatus::Draft),
            "pending" => Ok(TimeEntryStatus::Pending),
            "approved" => Ok(TimeEntryStatus::Approved),
            "rejected" => Ok(TimeEntryStatus::Rejected),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

#[cfg(test)]
mod time_entry_status_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(TimeEntryStatus::Draft, TimeEntryStatus::Pending, true)]
    #[case(TimeEntryStatus::Pending, TimeEntryStatus::Approved, true)]
    #[case(TimeEntryStatus::Pending, TimeEntryStatus::Rejected, true)]
    #[case(TimeEntryStatus::Draft, TimeEntryStatus::Approved, false)]
    #[case(TimeEntryStatus::Approved, TimeEntryStatus::Pending, false)]
    #[case(TimeEntryStatus::Rejected, TimeEntryStatus::Draft, false)]
    #[case(TimeEntryStatus::Approved, TimeEntryStatus::Rejected, false)]
    fn it_should_only_move_forward(
        #[case] from: TimeEntryStatus,
        #[case] to: TimeEntryStatus,
        #[case] allowed: bool,
    ) {
        assert_eq!(from.can_transition_to(to), allowed);
    }

    #[rstest]
    fn it_should_parse_what_it_prints() {
        for status in [
            TimeEntryStatus::Draft,
            TimeEntryStatus::Pending,
            TimeEntryStatus::Approved,
            TimeEntryStatus::Rejected,
        ] {
            assert_eq!(status.to_string().parse::<TimeEntryStatus>(), Ok(status));
        }
        assert!("archived".parse::<TimeEntryStatus>().is_err());
    }
}
