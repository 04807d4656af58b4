use crate::modules::scheduling::core::schedule_status::ScheduleStatus;
use crate::shared::core::clock_time;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A job location booked for a date window. Clocking in against it starts the work, clocking
/// out of the linked time entry completes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledJobLocation {
    pub id: String,
    pub job_location_id: String,
    pub job_location: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(with = "clock_time")]
    pub start_time: NaiveTime,
    #[serde(with = "clock_time")]
    pub end_time: NaiveTime,
    #[serde(default)]
    pub notes: Option<String>,
    pub status: ScheduleStatus,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("scheduled job location cannot move from {from} to {to}")]
pub struct InvalidScheduleTransition {
    pub from: ScheduleStatus,
    pub to: ScheduleStatus,
}

impl ScheduledJobLocation {
    pub fn is_open(&self) -> bool {
        self.status == ScheduleStatus::Scheduled
    }

    pub fn starts_on(&self, day: NaiveDate) -> bool {
        self.start_date == day
    }

    pub fn starts_after(&self, day: NaiveDate) -> bool {
        self.start_date > day
    }

    pub fn transition(&self, to: ScheduleStatus) -> Result<Self, InvalidScheduleTransition> {
        if !self.status.can_transition_to(to) {
            return Err(InvalidScheduleTransition {
                from: self.status,
                to,
            });
        }
        Ok(Self {
            status: to,
            ..self.clone()
        })
    }
}
