use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::modules::time_entries::adapters::inbound::graphql::committed_entry;
use crate::modules::time_entries::use_cases::list_time_entries::inbound::graphql::GqlTimeEntry;
use crate::modules::time_entries::use_cases::submit_time_entry::command::SubmitTimeEntry;
use crate::shared::core::primitives::now_millis;
use crate::shared::infrastructure::actor::Actor;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct SubmitTimeEntryMutation;

#[Object]
impl SubmitTimeEntryMutation {
    async fn submit_time_entry(
        &self,
        context: &Context<'_>,
        time_entry_id: ID,
    ) -> GqlResult<GqlTimeEntry> {
        let state = context.data_unchecked::<AppState>();
        let command = SubmitTimeEntry {
            time_entry_id: time_entry_id.to_string(),
            occurred_at: now_millis(),
            actor: Actor::of(context),
        };
        committed_entry(state, state.time_entries.submit(command).await).await
    }
}
