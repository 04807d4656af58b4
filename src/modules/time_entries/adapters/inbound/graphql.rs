use crate::modules::time_entries::use_cases::command_handler::{ApplicationError, Committed};
use crate::modules::time_entries::use_cases::list_time_entries::inbound::graphql::GqlTimeEntry;
use crate::shared::infrastructure::graphql_error::gql_error;
use crate::shell::state::AppState;

/// GraphQL counterpart of the HTTP `committed_response`: project, then return the entry.
pub async fn committed_entry(
    state: &AppState,
    result: Result<Committed, ApplicationError>,
) -> async_graphql::Result<GqlTimeEntry> {
    let committed = result.map_err(gql_error)?;
    state.project(&committed).await.map_err(gql_error)?;
    committed
        .state
        .entry()
        .map(GqlTimeEntry::from)
        .ok_or_else(|| async_graphql::Error::new("time entry no longer exists"))
}
