// In memory schedule stores. Each store can be switched offline to exercise failure paths.

use crate::modules::scheduling::adapters::outbound::stores::{
    ScheduleTemplateStore, ScheduledJobLocationStore, ScheduledShiftStore, ShiftFilter,
};
use crate::modules::scheduling::core::schedule_status::ScheduleStatus;
use crate::modules::scheduling::core::scheduled_job_location::ScheduledJobLocation;
use crate::modules::scheduling::core::shift::ScheduledShift;
use crate::modules::scheduling::core::template::ScheduleTemplate;
use crate::shared::infrastructure::store::StoreError;
use std::collections::HashMap;
use tokio::sync::RwLock;

fn offline(name: &str) -> StoreError {
    StoreError::Unavailable(format!("{name} offline"))
}

#[derive(Default)]
pub struct InMemoryScheduleTemplates {
    templates: RwLock<HashMap<String, ScheduleTemplate>>,
    is_offline: bool,
}

impl InMemoryScheduleTemplates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_templates(templates: impl IntoIterator<Item = ScheduleTemplate>) -> Self {
        Self {
            templates: RwLock::new(templates.into_iter().map(|t| (t.id.clone(), t)).collect()),
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(offline("Template store"));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl ScheduleTemplateStore for InMemoryScheduleTemplates {
    async fn list(&self) -> Result<Vec<ScheduleTemplate>, StoreError> {
        self.ensure_online()?;
        let mut templates: Vec<_> = self.templates.read().await.values().cloned().collect();
        templates.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(templates)
    }

    async fn get(&self, id: &str) -> Result<ScheduleTemplate, StoreError> {
        self.ensure_online()?;
        self.templates
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("schedule template", id))
    }

    async fn insert(&self, template: ScheduleTemplate) -> Result<(), StoreError> {
        self.ensure_online()?;
        let mut guard = self.templates.write().await;
        if guard.contains_key(&template.id) {
            return Err(StoreError::InvalidState(format!(
                "schedule template {} already exists",
                template.id
            )));
        }
        guard.insert(template.id.clone(), template);
        Ok(())
    }

    async fn replace(&self, template: ScheduleTemplate) -> Result<(), StoreError> {
        self.ensure_online()?;
        let mut guard = self.templates.write().await;
        match guard.get_mut(&template.id) {
            Some(slot) => {
                *slot = template;
                Ok(())
            }
            None => Err(StoreError::not_found("schedule template", template.id)),
        }
    }

    async fn remove(&self, id: &str) -> Result<(), StoreError> {
        self.ensure_online()?;
        self.templates
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::not_found("schedule template", id))
    }
}

#[derive(Default)]
pub struct InMemoryScheduledShifts {
    shifts: RwLock<HashMap<String, ScheduledShift>>,
    is_offline: bool,
}

impl InMemoryScheduledShifts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }
}

#[async_trait::async_trait]
impl ScheduledShiftStore for InMemoryScheduledShifts {
    async fn upsert_many(&self, shifts: &[ScheduledShift]) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(offline("Shift store"));
        }
        let mut guard = self.shifts.write().await;
        for shift in shifts {
            guard.insert(shift.id.clone(), shift.clone());
        }
        Ok(())
    }

    async fn list(&self, filter: &ShiftFilter) -> Result<Vec<ScheduledShift>, StoreError> {
        if self.is_offline {
            return Err(offline("Shift store"));
        }
        let mut shifts: Vec<_> = self
            .shifts
            .read()
            .await
            .values()
            .filter(|shift| filter.matches(shift))
            .cloned()
            .collect();
        shifts.sort_by(|a, b| {
            (a.date, a.start_time, &a.id).cmp(&(b.date, b.start_time, &b.id))
        });
        Ok(shifts)
    }
}

#[derive(Default)]
pub struct InMemoryScheduledJobLocations {
    schedules: RwLock<HashMap<String, ScheduledJobLocation>>,
    is_offline: bool,
}

impl InMemoryScheduledJobLocations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_schedules(schedules: impl IntoIterator<Item = ScheduledJobLocation>) -> Self {
        Self {
            schedules: RwLock::new(schedules.into_iter().map(|s| (s.id.clone(), s)).collect()),
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(offline("Schedule store"));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl ScheduledJobLocationStore for InMemoryScheduledJobLocations {
    async fn list(&self) -> Result<Vec<ScheduledJobLocation>, StoreError> {
        self.ensure_online()?;
        let mut schedules: Vec<_> = self.schedules.read().await.values().cloned().collect();
        schedules.sort_by(|a, b| {
            (a.start_date, a.start_time, &a.id).cmp(&(b.start_date, b.start_time, &b.id))
        });
        Ok(schedules)
    }

    async fn get(&self, id: &str) -> Result<ScheduledJobLocation, StoreError> {
        self.ensure_online()?;
        self.schedules
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("scheduled job location", id))
    }

    async fn put(&self, schedule: ScheduledJobLocation) -> Result<(), StoreError> {
        self.ensure_online()?;
        self.schedules
            .write()
            .await
            .insert(schedule.id.clone(), schedule);
        Ok(())
    }

    async fn swap_status(
        &self,
        id: &str,
        expected: ScheduleStatus,
        next: ScheduleStatus,
    ) -> Result<ScheduledJobLocation, StoreError> {
        self.ensure_online()?;
        let mut guard = self.schedules.write().await;
        let schedule = guard
            .get_mut(id)
            .ok_or_else(|| StoreError::not_found("scheduled job location", id))?;
        if schedule.status != expected {
            return Err(StoreError::InvalidState(format!(
                "scheduled job location {id} is {}, expected {expected}",
                schedule.status
            )));
        }
        schedule.status = next;
        Ok(schedule.clone())
    }
}
