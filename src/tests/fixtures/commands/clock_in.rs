// Shared test fixture for the ClockIn command, seeded from a JSON transport shape.

use crate::modules::time_entries::use_cases::clock_in::command::ClockIn;
use serde::Deserialize;
use std::fs;

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct ClockInDto {
    pub time_entry_id: String,
    pub employee_id: String,
    pub job_location: String,
    pub description: Option<String>,
    pub start_time: i64,
}

pub struct ClockInBuilder {
    inner: ClockIn,
}

impl Default for ClockInBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl ClockInBuilder {
    pub fn new() -> Self {
        let json_str =
            fs::read_to_string("./src/tests/fixtures/commands/json/clock_in.json").unwrap();
        let dto: ClockInDto = serde_json::from_str(&json_str).unwrap();

        Self {
            inner: ClockIn {
                time_entry_id: dto.time_entry_id,
                actor: dto.employee_id.clone(),
                employee_id: dto.employee_id,
                job_location: dto.job_location,
                scheduled_job_location_id: None,
                description: dto.description,
                occurred_at: dto.start_time,
                start_time: dto.start_time,
            },
        }
    }

    pub fn time_entry_id(mut self, v: impl Into<String>) -> Self {
        self.inner.time_entry_id = v.into();
        self
    }

    pub fn employee_id(mut self, v: impl Into<String>) -> Self {
        self.inner.employee_id = v.into();
        self
    }

    pub fn job_location(mut self, v: impl Into<String>) -> Self {
        self.inner.job_location = v.into();
        self
    }

    pub fn scheduled_job_location_id(mut self, v: impl Into<String>) -> Self {
        self.inner.scheduled_job_location_id = Some(v.into());
        self
    }

    pub fn description(mut self, v: impl Into<String>) -> Self {
        self.inner.description = Some(v.into());
        self
    }

    pub fn start_time(mut self, v: i64) -> Self {
        self.inner.start_time = v;
        self.inner.occurred_at = v;
        self
    }

    pub fn build(self) -> ClockIn {
        self.inner
    }
}

#[cfg(test)]
mod time_entry_clock_in_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = ClockInBuilder::default().build();
        assert_eq!(built.time_entry_id, "te-fixed-0001");
        assert_eq!(built.employee_id, "emp-fixed-0001");
        assert_eq!(built.actor, "emp-fixed-0001");
        assert_eq!(built.start_time, 1_704_099_600_000);
        assert_eq!(built.occurred_at, built.start_time);
        assert_eq!(built.scheduled_job_location_id, None);
        assert_eq!(built.description.as_deref(), Some("Front desk cover"));
    }

    #[rstest]
    fn setters_override_fields_and_build_returns_inner() {
        let custom = ClockInBuilder::new()
            .time_entry_id("te-123")
            .employee_id("emp-456")
            .job_location("Warehouse")
            .scheduled_job_location_id("sjl-9")
            .description("Night shift")
            .start_time(1111)
            .build();

        assert_eq!(custom.time_entry_id, "te-123");
        assert_eq!(custom.employee_id, "emp-456");
        assert_eq!(custom.job_location, "Warehouse");
        assert_eq!(custom.scheduled_job_location_id.as_deref(), Some("sjl-9"));
        assert_eq!(custom.description.as_deref(), Some("Night shift"));
        assert_eq!(custom.start_time, 1111);
        assert_eq!(custom.occurred_at, 1111);
    }
}
