use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::modules::time_entries::adapters::inbound::graphql::committed_entry;
use crate::modules::time_entries::use_cases::approve_time_entry::command::ApproveTimeEntry;
use crate::modules::time_entries::use_cases::list_time_entries::inbound::graphql::GqlTimeEntry;
use crate::shared::core::primitives::now_millis;
use crate::shared::infrastructure::actor::Actor;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct ApproveTimeEntryMutation;

#[Object]
impl ApproveTimeEntryMutation {
    async fn approve_time_entry(
        &self,
        context: &Context<'_>,
        time_entry_id: ID,
        note: Option<String>,
    ) -> GqlResult<GqlTimeEntry> {
        let state = context.data_unchecked::<AppState>();
        let command = ApproveTimeEntry {
            time_entry_id: time_entry_id.to_string(),
            note,
            occurred_at: now_millis(),
            actor: Actor::of(context),
        };
        committed_entry(state, state.time_entries.approve(command).await).await
    }
}
