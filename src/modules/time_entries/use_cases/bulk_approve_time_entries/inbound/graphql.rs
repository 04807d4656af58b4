use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::time_entries::core::status::TimeEntryStatus;
use crate::modules::time_entries::use_cases::bulk_approve_time_entries::command::BulkApproveTimeEntries;
use crate::modules::time_entries::use_cases::bulk_approve_time_entries::handler::{
    ApprovalOutcome, BulkApprovalItem,
};
use crate::shared::core::primitives::now_millis;
use crate::shared::infrastructure::actor::Actor;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlBulkApprovalItem {
    pub time_entry_id: String,
    /// `approved`, `skipped` or `failed`.
    pub outcome: String,
    pub status: Option<TimeEntryStatus>,
    pub error: Option<String>,
    pub kind: Option<String>,
}

impl From<BulkApprovalItem> for GqlBulkApprovalItem {
    fn from(item: BulkApprovalItem) -> Self {
        let (outcome, status, error, kind) = match item.outcome {
            ApprovalOutcome::Approved => ("approved", Some(TimeEntryStatus::Approved), None, None),
            ApprovalOutcome::Skipped { status } => ("skipped", Some(status), None, None),
            ApprovalOutcome::Failed { error, kind } => {
                ("failed", None, Some(error), Some(kind.as_str().to_string()))
            }
        };
        Self {
            time_entry_id: item.time_entry_id,
            outcome: outcome.to_string(),
            status,
            error,
            kind,
        }
    }
}

#[derive(Default)]
pub struct BulkApproveMutation;

#[Object]
impl BulkApproveMutation {
    async fn bulk_approve_time_entries(
        &self,
        context: &Context<'_>,
        time_entry_ids: Vec<String>,
        note: Option<String>,
    ) -> GqlResult<Vec<GqlBulkApprovalItem>> {
        let state = context.data_unchecked::<AppState>();
        let command = BulkApproveTimeEntries {
            time_entry_ids,
            note,
            occurred_at: now_millis(),
            actor: Actor::of(context),
        };
        let approval = state.time_entries.bulk_approve(command).await;
        state.project_each(&approval.committed).await;
        Ok(approval.items.into_iter().map(Into::into).collect())
    }
}
