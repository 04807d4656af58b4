use crate::modules::directory::core::employee_type::EmployeeType;
use crate::modules::directory::core::job_location::{JobLocation, JobLocationDraft};

pub fn make_job_location_draft() -> JobLocationDraft {
    JobLocationDraft {
        name: "Downtown Office".to_string(),
        address: "100 Main St".to_string(),
        city: "Springfield".to_string(),
        state: "IL".to_string(),
        zip: "62701".to_string(),
    }
}

pub fn make_job_location() -> JobLocation {
    JobLocation::from_draft("jl-1", make_job_location_draft(), true)
}

pub fn make_employee_type() -> EmployeeType {
    EmployeeType {
        id: "et-1".to_string(),
        name: "Cleaner".to_string(),
        description: "General cleaning and maintenance staff".to_string(),
        qualifications: vec!["Basic cleaning certification".to_string()],
        allowed_job_locations: vec!["office".to_string(), "retail".to_string()],
    }
}
