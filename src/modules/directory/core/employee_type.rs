use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeType {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub qualifications: Vec<String>,
    #[serde(default)]
    pub allowed_job_locations: Vec<String>,
}
