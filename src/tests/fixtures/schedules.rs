use crate::modules::scheduling::core::schedule_status::ScheduleStatus;
use crate::modules::scheduling::core::scheduled_job_location::ScheduledJobLocation;
use chrono::{NaiveDate, NaiveTime};

pub fn make_scheduled_job_location() -> ScheduledJobLocation {
    ScheduledJobLocation {
        id: "sjl-1".to_string(),
        job_location_id: "jl-1".to_string(),
        job_location: "Downtown Office - Springfield, IL".to_string(),
        start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        end_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
        notes: Some("Bring the site badge".to_string()),
        status: ScheduleStatus::Scheduled,
    }
}
