use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::modules::time_entries::adapters::inbound::graphql::committed_entry;
use crate::modules::time_entries::use_cases::list_time_entries::inbound::graphql::GqlTimeEntry;
use crate::modules::time_entries::use_cases::reject_time_entry::command::RejectTimeEntry;
use crate::shared::core::primitives::now_millis;
use crate::shared::infrastructure::actor::Actor;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct RejectTimeEntryMutation;

#[Object]
impl RejectTimeEntryMutation {
    async fn reject_time_entry(
        &self,
        context: &Context<'_>,
        time_entry_id: ID,
        reason: String,
    ) -> GqlResult<GqlTimeEntry> {
        let state = context.data_unchecked::<AppState>();
        let command = RejectTimeEntry {
            time_entry_id: time_entry_id.to_string(),
            reason,
            occurred_at: now_millis(),
            actor: Actor::of(context),
        };
        committed_entry(state, state.time_entries.reject(command).await).await
    }
}
