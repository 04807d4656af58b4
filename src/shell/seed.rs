// Reference data preloaded into the in-memory stores at startup.

use crate::modules::directory::core::employee_type::EmployeeType;
use crate::modules::directory::core::job_location::JobLocation;
use crate::modules::scheduling::core::scheduled_job_location::ScheduledJobLocation;
use crate::modules::scheduling::core::template::ScheduleTemplate;
use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SeedData {
    pub job_locations: Vec<JobLocation>,
    pub employee_types: Vec<EmployeeType>,
    pub schedule_templates: Vec<ScheduleTemplate>,
    pub scheduled_job_locations: Vec<ScheduledJobLocation>,
}

impl SeedData {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading seed file {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("parsing seed file {}", path.display()))
    }

    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}
