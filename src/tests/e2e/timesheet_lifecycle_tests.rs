use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use tower::ServiceExt;

use crate::modules::scheduling::core::schedule_status::ScheduleStatus;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::app::{
    empty_request, json_request, make_app_state, read_json, seed_pending_entry,
};

const START: i64 = 1_704_099_600_000;
const END: i64 = START + 8 * 3_600_000;

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = if status == StatusCode::NO_CONTENT {
        serde_json::Value::Null
    } else {
        read_json(response).await
    };
    (status, body)
}

#[tokio::test]
async fn walks_an_entry_from_clock_in_to_approval() {
    let state: AppState = make_app_state();
    let app = router(state.clone());

    let (status, clocked_in) = send(
        &app,
        json_request(
            "POST",
            "/time-entries/clock-in",
            serde_json::json!({
                "employee_id": "emp-fixed-0001",
                "scheduled_job_location_id": "sjl-1",
                "start_time": START
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = clocked_in["time_entry_id"].as_str().unwrap().to_string();

    let (status, draft) = send(
        &app,
        json_request(
            "POST",
            &format!("/time-entries/{id}/clock-out"),
            serde_json::json!({"end_time": END}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(draft["status"], "draft");
    assert_eq!(draft["total_hours"], 8.0);
    assert_eq!(
        state.schedules.get("sjl-1").await.unwrap().status,
        ScheduleStatus::Completed
    );

    let (status, pending) = send(
        &app,
        empty_request("POST", &format!("/time-entries/{id}/submit")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(pending["status"], "pending");

    let (_, queue) = send(&app, empty_request("GET", "/time-entries/review")).await;
    assert_eq!(queue[0]["time_entry_id"], id.as_str());

    let (status, approved) = send(
        &app,
        json_request(
            "POST",
            &format!("/time-entries/{id}/approve"),
            serde_json::json!({}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(approved["status"], "approved");
    assert_eq!(approved["start_time"], START);
    assert_eq!(approved["end_time"], END);
    assert_eq!(approved["job_location"], "Downtown Office - Springfield, IL");
    assert_eq!(approved["manager_notes"], serde_json::Value::Null);

    let (_, queue) = send(&app, empty_request("GET", "/time-entries/review")).await;
    assert_eq!(queue, serde_json::json!([]));

    let (_, listed) = send(
        &app,
        empty_request("GET", "/time-entries?employee_id=emp-fixed-0001"),
    )
    .await;
    assert_eq!(listed[0]["status"], "approved");

    let notifications: Vec<String> = state
        .outbox
        .rows()
        .await
        .into_iter()
        .map(|row| row.event_type)
        .collect();
    assert_eq!(notifications, vec!["TimesheetSubmitted", "TimesheetApproved"]);
}

#[tokio::test]
async fn refuses_to_reject_without_a_reason() {
    let state = make_app_state();
    let entry = seed_pending_entry(&state).await;
    let app = router(state.clone());
    let uri = format!("/time-entries/{}/reject", entry.time_entry_id);

    for body in [
        serde_json::json!({}),
        serde_json::json!({"reason": ""}),
        serde_json::json!({"reason": "   "}),
    ] {
        let (status, error) = send(&app, json_request("POST", &uri, body)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(error["kind"], "validation");
    }

    let (_, queue) = send(&app, empty_request("GET", "/time-entries/review")).await;
    assert_eq!(queue[0]["time_entry_id"], entry.time_entry_id.as_str());
    assert!(
        state
            .outbox
            .rows()
            .await
            .iter()
            .all(|row| row.event_type != "TimesheetRejected")
    );

    let (status, rejected) = send(
        &app,
        json_request("POST", &uri, serde_json::json!({"reason": "Overlaps another shift"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(rejected["status"], "rejected");
}

#[tokio::test]
async fn deletes_a_draft_and_forgets_it() {
    let state = make_app_state();
    let app = router(state);

    let (_, clocked_in) = send(
        &app,
        json_request(
            "POST",
            "/time-entries/clock-in",
            serde_json::json!({
                "employee_id": "emp-2",
                "job_location": "Depot",
                "start_time": START
            }),
        ),
    )
    .await;
    let id = clocked_in["time_entry_id"].as_str().unwrap().to_string();

    let (status, _) = send(&app, empty_request("DELETE", &format!("/time-entries/{id}"))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(
        &app,
        empty_request("POST", &format!("/time-entries/{id}/submit")),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, listed) = send(&app, empty_request("GET", "/time-entries?employee_id=emp-2")).await;
    assert_eq!(listed, serde_json::json!([]));
}
