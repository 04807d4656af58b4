use crate::modules::time_entries::core::status::TimeEntryStatus;
use crate::modules::time_entries::use_cases::list_time_entries::projection::TimeEntryView;
use async_trait::async_trait;

#[async_trait]
pub trait TimeEntryQueries {
    async fn list_by_employee_id(
        &self,
        employee_id: &str,
        offset: u64,
        limit: u64,
        sort_by_start_time_desc: bool,
    ) -> anyhow::Result<Vec<TimeEntryView>>;

    /// Review queue: entries in `status`, oldest first so managers work through the backlog.
    async fn list_by_status(
        &self,
        status: TimeEntryStatus,
        offset: u64,
        limit: u64,
    ) -> anyhow::Result<Vec<TimeEntryView>>;

    async fn get(&self, time_entry_id: &str) -> anyhow::Result<Option<TimeEntryView>>;
}
