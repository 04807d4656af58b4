use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use tower::ServiceExt;

use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::app::{json_request, make_app_state, read_json, seed_pending_entry};

async fn execute(state: &AppState, query: &str) -> serde_json::Value {
    let response = router(state.clone())
        .oneshot(json_request("POST", "/gql", serde_json::json!({"query": query})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    read_json(response).await
}

#[tokio::test]
async fn serves_graphiql() {
    let response = router(make_app_state())
        .oneshot(Request::get("/gql").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn reviews_and_approves_through_graphql() {
    let state = make_app_state();
    let entry = seed_pending_entry(&state).await;

    let queue = execute(&state, "{ timeEntriesForReview { timeEntryId status } }").await;
    assert_eq!(
        queue["data"]["timeEntriesForReview"][0]["timeEntryId"],
        entry.time_entry_id.as_str()
    );
    assert_eq!(queue["data"]["timeEntriesForReview"][0]["status"], "PENDING");

    let rejected = execute(
        &state,
        &format!(
            r#"mutation {{ rejectTimeEntry(timeEntryId: "{}", reason: " ") {{ status }} }}"#,
            entry.time_entry_id
        ),
    )
    .await;
    assert_eq!(rejected["errors"][0]["extensions"]["kind"], "validation");
    assert_eq!(rejected["errors"][0]["extensions"]["retryable"], false);

    let approved = execute(
        &state,
        &format!(
            r#"mutation {{ approveTimeEntry(timeEntryId: "{}", note: "ok") {{ status managerNotes updatedBy }} }}"#,
            entry.time_entry_id
        ),
    )
    .await;
    assert_eq!(approved["data"]["approveTimeEntry"]["status"], "APPROVED");
    assert_eq!(approved["data"]["approveTimeEntry"]["managerNotes"], "ok");
    assert_eq!(approved["data"]["approveTimeEntry"]["updatedBy"], "mgr-0001");

    let mine = execute(
        &state,
        r#"{ timeEntriesByEmployee(employeeId: "emp-fixed-0001") { status } }"#,
    )
    .await;
    assert_eq!(mine["data"]["timeEntriesByEmployee"][0]["status"], "APPROVED");
}

#[tokio::test]
async fn bulk_approves_through_graphql() {
    let state = make_app_state();
    let entry = seed_pending_entry(&state).await;

    let result = execute(
        &state,
        &format!(
            r#"mutation {{ bulkApproveTimeEntries(timeEntryIds: ["{}", "te-missing"]) {{ timeEntryId outcome kind }} }}"#,
            entry.time_entry_id
        ),
    )
    .await;

    let items = &result["data"]["bulkApproveTimeEntries"];
    assert_eq!(items[0]["outcome"], "approved");
    assert_eq!(items[1]["outcome"], "failed");
    assert_eq!(items[1]["kind"], "not_found");
}

#[tokio::test]
async fn reads_reference_data_and_applies_templates() {
    let state = make_app_state();

    let reference = execute(
        &state,
        "{ scheduleTemplates { id shifts { dayOfWeek startTime } } jobLocations(activeOnly: true) { id displayName } employeeTypes { name } }",
    )
    .await;
    assert_eq!(reference["data"]["scheduleTemplates"][0]["id"], "tpl-1");
    assert_eq!(
        reference["data"]["scheduleTemplates"][0]["shifts"][0]["dayOfWeek"],
        "MONDAY"
    );
    assert_eq!(
        reference["data"]["scheduleTemplates"][0]["shifts"][0]["startTime"],
        "09:00"
    );
    assert_eq!(
        reference["data"]["jobLocations"][0]["displayName"],
        "Downtown Office - Springfield, IL"
    );
    assert_eq!(reference["data"]["employeeTypes"][0]["name"], "Cleaner");

    let applied = execute(
        &state,
        r#"mutation { applyScheduleTemplate(templateId: "tpl-1", startDate: "2024-01-01", endDate: "2024-01-03") { date status } }"#,
    )
    .await;
    let shifts = applied["data"]["applyScheduleTemplate"].as_array().unwrap();
    assert_eq!(shifts.len(), 1);
    assert_eq!(shifts[0]["date"], "2024-01-01");
    assert_eq!(shifts[0]["status"], "SCHEDULED");
}
