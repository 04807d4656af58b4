use crate::modules::scheduling::core::day_of_week::DayOfWeek;
use crate::shared::core::clock_time;
use crate::shared::core::errors::{Classify, ErrorKind};
use crate::shared::core::primitives::is_blank;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One recurring slot of a weekly template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateShift {
    pub day_of_week: DayOfWeek,
    #[serde(with = "clock_time")]
    pub start_time: NaiveTime,
    #[serde(with = "clock_time")]
    pub end_time: NaiveTime,
    pub employee_type_id: String,
    pub number_of_employees: u32,
}

/// Template content as supplied by a caller, before an id is assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateDraft {
    pub name: String,
    pub job_location_id: String,
    pub shifts: Vec<TemplateShift>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleTemplate {
    pub id: String,
    pub name: String,
    pub job_location_id: String,
    pub shifts: Vec<TemplateShift>,
}

impl ScheduleTemplate {
    pub fn from_draft(id: impl Into<String>, draft: TemplateDraft) -> Self {
        Self {
            id: id.into(),
            name: draft.name.trim().to_string(),
            job_location_id: draft.job_location_id,
            shifts: draft.shifts,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("template name is required")]
    BlankName,

    #[error("template job location is required")]
    BlankJobLocation,

    #[error("template needs at least one shift")]
    NoShifts,

    #[error("shift {index} must end after it starts")]
    InvalidShiftInterval { index: usize },

    #[error("shift {index} needs at least one employee")]
    NoEmployees { index: usize },

    #[error("shift {index} has no employee type")]
    BlankEmployeeType { index: usize },
}

impl Classify for TemplateError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Validation
    }
}

impl TemplateDraft {
    pub fn validate(&self) -> Result<(), TemplateError> {
        if is_blank(&self.name) {
            return Err(TemplateError::BlankName);
        }
        if is_blank(&self.job_location_id) {
            return Err(TemplateError::BlankJobLocation);
        }
        if self.shifts.is_empty() {
            return Err(TemplateError::NoShifts);
        }
        for (index, shift) in self.shifts.iter().enumerate() {
            if shift.end_time <= shift.start_time {
                return Err(TemplateError::InvalidShiftInterval { index });
            }
            if shift.number_of_employees == 0 {
                return Err(TemplateError::NoEmployees { index });
            }
            if is_blank(&shift.employee_type_id) {
                return Err(TemplateError::BlankEmployeeType { index });
            }
        }
        Ok(())
    }
}
