use crate::modules::scheduling::adapters::outbound::stores::{
    ScheduleTemplateStore, ScheduledShiftStore,
};
use crate::modules::scheduling::core::expander::{days_between, expand};
use crate::modules::scheduling::core::shift::ScheduledShift;
use crate::modules::scheduling::use_cases::apply_template::command::ApplyScheduleTemplate;
use crate::modules::scheduling::use_cases::errors::SchedulingError;

/// Longest range one application may cover.
pub const MAX_APPLY_DAYS: u32 = 366;

/// Expands the template over the requested range and stores the resulting shifts.
/// The template itself is left untouched, and re-applying a range overwrites rather than
/// duplicates.
#[tracing::instrument(skip(templates, shifts), fields(template_id = %command.template_id))]
pub async fn apply_template(
    templates: &dyn ScheduleTemplateStore,
    shifts: &dyn ScheduledShiftStore,
    command: ApplyScheduleTemplate,
) -> Result<Vec<ScheduledShift>, SchedulingError> {
    let days = days_between(command.start_date, command.end_date).ok_or(
        SchedulingError::InvalidRange {
            start: command.start_date,
            end: command.end_date,
        },
    )?;
    if days > MAX_APPLY_DAYS {
        return Err(SchedulingError::RangeTooLong {
            days,
            max: MAX_APPLY_DAYS,
        });
    }
    let template = templates.get(&command.template_id).await?;
    let produced: Vec<ScheduledShift> = expand(&template, command.start_date, days).collect();
    shifts.upsert_many(&produced).await?;
    tracing::info!(days, shifts = produced.len(), "schedule template applied");
    Ok(produced)
}
