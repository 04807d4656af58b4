use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::time_entries::core::state::TimeEntry;
use crate::modules::time_entries::core::status::TimeEntryStatus;
use crate::modules::time_entries::use_cases::list_time_entries::projection::TimeEntryView;
use crate::shell::state::AppState;

const DEFAULT_LIMIT: i64 = 20;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlTimeEntry {
    pub time_entry_id: String,
    pub employee_id: String,
    pub start_time: i64,
    pub end_time: Option<i64>,
    pub job_location: String,
    pub scheduled_job_location_id: Option<String>,
    pub description: String,
    pub status: TimeEntryStatus,
    pub total_hours: Option<f64>,
    pub manager_notes: Option<String>,
    pub rejection_reason: Option<String>,
    pub created_at: i64,
    pub created_by: String,
    pub updated_at: i64,
    pub updated_by: String,
}

impl From<TimeEntryView> for GqlTimeEntry {
    fn from(v: TimeEntryView) -> Self {
        Self {
            time_entry_id: v.time_entry_id,
            employee_id: v.employee_id,
            start_time: v.start_time,
            end_time: v.end_time,
            job_location: v.job_location,
            scheduled_job_location_id: v.scheduled_job_location_id,
            description: v.description,
            status: v.status,
            total_hours: v.total_hours,
            manager_notes: v.manager_notes,
            rejection_reason: v.rejection_reason,
            created_at: v.created_at,
            created_by: v.created_by,
            updated_at: v.updated_at,
            updated_by: v.updated_by,
        }
    }
}

impl From<&TimeEntry> for GqlTimeEntry {
    fn from(entry: &TimeEntry) -> Self {
        TimeEntryView::from(entry).into()
    }
}

fn page(offset: Option<i64>, limit: Option<i64>) -> (u64, u64) {
    (
        offset.unwrap_or(0).max(0) as u64,
        limit.unwrap_or(DEFAULT_LIMIT).max(0) as u64,
    )
}

#[derive(Default)]
pub struct TimeEntryQuery;

#[Object]
impl TimeEntryQuery {
    async fn time_entries_by_employee(
        &self,
        context: &Context<'_>,
        employee_id: String,
        offset: Option<i64>,
        limit: Option<i64>,
        sort_desc: Option<bool>,
    ) -> GqlResult<Vec<GqlTimeEntry>> {
        let state = context.data_unchecked::<AppState>();
        let (offset, limit) = page(offset, limit);
        let list = state
            .queries
            .list_by_employee_id(&employee_id, offset, limit, sort_desc.unwrap_or(true))
            .await?;
        Ok(list.into_iter().map(Into::into).collect())
    }

    /// Pending entries unless another status is asked for, oldest first.
    async fn time_entries_for_review(
        &self,
        context: &Context<'_>,
        status: Option<TimeEntryStatus>,
        offset: Option<i64>,
        limit: Option<i64>,
    ) -> GqlResult<Vec<GqlTimeEntry>> {
        let state = context.data_unchecked::<AppState>();
        let (offset, limit) = page(offset, limit);
        let list = state
            .queries
            .list_by_status(status.unwrap_or(TimeEntryStatus::Pending), offset, limit)
            .await?;
        Ok(list.into_iter().map(Into::into).collect())
    }
}
