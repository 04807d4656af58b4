use axum::http::StatusCode;
use tower::ServiceExt;

use crate::modules::time_entries::use_cases::command_handler::stream_id_for;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shell::http::router;
use crate::tests::fixtures::app::{json_request, make_app_state, read_json, seed_pending_entry};

#[tokio::test]
async fn approves_pending_entries_and_skips_the_rest() {
    let state = make_app_state();
    let a = seed_pending_entry(&state).await;
    let b = seed_pending_entry(&state).await;
    let c = seed_pending_entry(&state).await;
    let app = router(state.clone());

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            &format!("/time-entries/{}/approve", b.time_entry_id),
            serde_json::json!({"note": "first pass"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let b_before = read_json(response).await;
    let b_version = state
        .event_store
        .load(&stream_id_for(&b.time_entry_id))
        .await
        .unwrap()
        .version;

    let response = app
        .oneshot(json_request(
            "POST",
            "/time-entries/bulk-approve",
            serde_json::json!({
                "time_entry_ids": [a.time_entry_id, b.time_entry_id, c.time_entry_id],
                "note": "weekly batch"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let items = read_json(response).await;
    assert_eq!(items[0]["outcome"], "approved");
    assert_eq!(items[1]["outcome"], "skipped");
    assert_eq!(items[1]["status"], "approved");
    assert_eq!(items[2]["outcome"], "approved");

    for id in [&a.time_entry_id, &c.time_entry_id] {
        let row = state.queries.get(id).await.unwrap().unwrap();
        assert_eq!(row.status.as_str(), "approved");
        assert_eq!(row.manager_notes.as_deref(), Some("weekly batch"));
    }

    let b_after = state.queries.get(&b.time_entry_id).await.unwrap().unwrap();
    assert_eq!(b_after.manager_notes.as_deref(), Some("first pass"));
    assert_eq!(b_after.updated_at, b_before["updated_at"]);
    assert_eq!(
        state
            .event_store
            .load(&stream_id_for(&b.time_entry_id))
            .await
            .unwrap()
            .version,
        b_version
    );

    let approvals = state
        .outbox
        .rows()
        .await
        .into_iter()
        .filter(|row| row.event_type == "TimesheetApproved")
        .count();
    assert_eq!(approvals, 3);
}
