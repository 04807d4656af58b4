use axum::{body::Body, http::Request, response::Response};
use http_body_util::BodyExt;

use crate::modules::time_entries::adapters::outbound::projections_in_memory::InMemoryProjections;
use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::core::state::TimeEntry;
use crate::modules::time_entries::use_cases::command_handler::stream_id_for;
use crate::modules::time_entries::use_cases::list_time_entries::handler::Projector;
use crate::shared::infrastructure::actor::ACTOR_HEADER;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use crate::shell::seed::SeedData;
use crate::shell::state::AppState;
use crate::tests::fixtures::handlers::{seed_draft, seed_pending};
use crate::tests::fixtures::directory::{make_employee_type, make_job_location};
use crate::tests::fixtures::schedules::make_scheduled_job_location;
use crate::tests::fixtures::templates::make_schedule_template;
use std::sync::Arc;

pub const TOPIC: &str = "time-entries.v1";

pub fn make_seed() -> SeedData {
    SeedData {
        job_locations: vec![make_job_location()],
        employee_types: vec![make_employee_type()],
        schedule_templates: vec![make_schedule_template()],
        scheduled_job_locations: vec![make_scheduled_job_location()],
    }
}

pub fn make_app_state() -> AppState {
    AppState::in_memory(TOPIC, make_seed())
}

pub fn make_offline_event_store_state() -> AppState {
    let mut event_store = InMemoryEventStore::<TimeEntryEvent>::new();
    event_store.toggle_offline();
    AppState::with_event_store(TOPIC, event_store, make_seed())
}

/// Swaps in a projector whose repositories refuse every call; commands still commit.
pub fn take_read_model_offline(state: &mut AppState) {
    let mut projections = InMemoryProjections::new();
    projections.toggle_offline();
    let projections = Arc::new(projections);
    state.projector = Arc::new(Projector::new(
        "time_entry_summary",
        projections.clone(),
        projections,
    ));
}

pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .header(ACTOR_HEADER, "mgr-0001")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(ACTOR_HEADER, "emp-fixed-0001")
        .body(Body::empty())
        .unwrap()
}

pub async fn read_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Replays a stream into the read model, the same way inbound adapters project after a command.
pub async fn project_stream(state: &AppState, time_entry_id: &str) {
    let stream_id = stream_id_for(time_entry_id);
    let stream = state.event_store.load(&stream_id).await.unwrap();
    for (index, event) in stream.events.iter().enumerate() {
        state
            .projector
            .apply_one(&stream_id, index as i64 + 1, event)
            .await
            .unwrap();
    }
}

pub async fn seed_draft_entry(state: &AppState) -> TimeEntry {
    let entry = seed_draft(&state.time_entries).await;
    project_stream(state, &entry.time_entry_id).await;
    entry
}

pub async fn seed_pending_entry(state: &AppState) -> TimeEntry {
    let entry = seed_pending(&state.time_entries).await;
    project_stream(state, &entry.time_entry_id).await;
    entry
}
