use crate::modules::scheduling::core::day_of_week::DayOfWeek;
use crate::modules::scheduling::core::template::{ScheduleTemplate, TemplateDraft, TemplateShift};
use crate::shared::core::clock_time;

pub fn shift_on(day: DayOfWeek, start: &str, end: &str, employees: u32) -> TemplateShift {
    TemplateShift {
        day_of_week: day,
        start_time: clock_time::parse(start).unwrap(),
        end_time: clock_time::parse(end).unwrap(),
        employee_type_id: "et-1".to_string(),
        number_of_employees: employees,
    }
}

pub fn make_template_draft() -> TemplateDraft {
    TemplateDraft {
        name: "Weekday cover".to_string(),
        job_location_id: "jl-1".to_string(),
        shifts: vec![
            shift_on(DayOfWeek::Monday, "09:00", "17:00", 2),
            shift_on(DayOfWeek::Wednesday, "09:00", "17:00", 1),
            shift_on(DayOfWeek::Friday, "12:00", "20:00", 1),
        ],
    }
}

pub fn make_schedule_template() -> ScheduleTemplate {
    ScheduleTemplate::from_draft("tpl-1", make_template_draft())
}
