use crate::modules::scheduling::core::day_of_week::DayOfWeek;
use crate::modules::scheduling::core::schedule_status::ScheduleStatus;
use crate::modules::scheduling::core::shift::ScheduledShift;
use crate::modules::scheduling::core::template::ScheduleTemplate;
use chrono::{Days, NaiveDate};

/// Lazily expands a weekly template over `[start, start + days)`.
///
/// Every calendar day in the range emits one [`ScheduledShift`] per template shift whose weekday
/// matches, in template order. The result depends only on the arguments, so expanding the same
/// range twice yields identical shifts, ids included.
pub fn expand(
    template: &ScheduleTemplate,
    start: NaiveDate,
    days: u32,
) -> impl Iterator<Item = ScheduledShift> + '_ {
    (0..u64::from(days))
        .map_while(move |offset| start.checked_add_days(Days::new(offset)))
        .flat_map(move |date| {
            let weekday = DayOfWeek::of(date);
            template
                .shifts
                .iter()
                .enumerate()
                .filter(move |(_, shift)| shift.day_of_week == weekday)
                .map(move |(index, shift)| ScheduledShift {
                    id: ScheduledShift::id_for(&template.id, date, index),
                    template_id: template.id.clone(),
                    job_location_id: template.job_location_id.clone(),
                    date,
                    start_time: shift.start_time,
                    end_time: shift.end_time,
                    employee_type_id: shift.employee_type_id.clone(),
                    number_of_employees: shift.number_of_employees,
                    status: ScheduleStatus::Scheduled,
                })
        })
}

/// Length in days of the half-open range `[start, end)`, or `None` when `end` precedes `start`.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> Option<u32> {
    u32::try_from(end.signed_duration_since(start).num_days()).ok()
}
