use crate::modules::scheduling::adapters::outbound::stores::ScheduleTemplateStore;
use crate::modules::scheduling::core::template::{ScheduleTemplate, TemplateDraft};
use crate::modules::scheduling::use_cases::errors::SchedulingError;
use crate::shared::core::primitives::new_id;

pub async fn list_templates(
    store: &dyn ScheduleTemplateStore,
) -> Result<Vec<ScheduleTemplate>, SchedulingError> {
    Ok(store.list().await?)
}

pub async fn get_template(
    store: &dyn ScheduleTemplateStore,
    id: &str,
) -> Result<ScheduleTemplate, SchedulingError> {
    Ok(store.get(id).await?)
}

#[tracing::instrument(skip(store, draft), fields(name = %draft.name))]
pub async fn create_template(
    store: &dyn ScheduleTemplateStore,
    draft: TemplateDraft,
) -> Result<ScheduleTemplate, SchedulingError> {
    draft.validate()?;
    let template = ScheduleTemplate::from_draft(new_id(), draft);
    store.insert(template.clone()).await?;
    tracing::info!(template_id = %template.id, "schedule template created");
    Ok(template)
}

#[tracing::instrument(skip(store, draft))]
pub async fn update_template(
    store: &dyn ScheduleTemplateStore,
    id: &str,
    draft: TemplateDraft,
) -> Result<ScheduleTemplate, SchedulingError> {
    draft.validate()?;
    let template = ScheduleTemplate::from_draft(id, draft);
    store.replace(template.clone()).await?;
    tracing::info!("schedule template updated");
    Ok(template)
}

#[tracing::instrument(skip(store))]
pub async fn delete_template(
    store: &dyn ScheduleTemplateStore,
    id: &str,
) -> Result<(), SchedulingError> {
    store.remove(id).await?;
    tracing::info!("schedule template deleted");
    Ok(())
}
