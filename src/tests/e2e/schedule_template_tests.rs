use axum::http::StatusCode;
use tower::ServiceExt;

use crate::shell::http::router;
use crate::tests::fixtures::app::{empty_request, json_request, make_app_state, read_json};

#[tokio::test]
async fn applies_a_monday_template_to_one_week() {
    let app = router(make_app_state());

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/schedule-templates",
            serde_json::json!({
                "name": "Monday cleaners",
                "job_location_id": "jl-1",
                "shifts": [{
                    "day_of_week": "monday",
                    "start_time": "09:00",
                    "end_time": "17:00",
                    "employee_type_id": "et-1",
                    "number_of_employees": 2
                }]
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let template = read_json(response).await;
    let id = template["id"].as_str().unwrap().to_string();

    let range = serde_json::json!({"start_date": "2024-01-01", "end_date": "2024-01-08"});
    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                &format!("/schedule-templates/{id}/apply"),
                range.clone(),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let produced = read_json(response).await;
        assert_eq!(produced.as_array().map(Vec::len), Some(1));
        assert_eq!(produced[0]["date"], "2024-01-01");
        assert_eq!(produced[0]["start_time"], "09:00");
        assert_eq!(produced[0]["end_time"], "17:00");
        assert_eq!(produced[0]["number_of_employees"], 2);
    }

    let response = app
        .clone()
        .oneshot(empty_request("GET", "/scheduled-shifts?job_location_id=jl-1"))
        .await
        .unwrap();
    let stored = read_json(response).await;
    assert_eq!(stored.as_array().map(Vec::len), Some(1));

    let response = app
        .oneshot(empty_request("GET", &format!("/schedule-templates/{id}")))
        .await
        .unwrap();
    assert_eq!(read_json(response).await, template);
}

#[tokio::test]
async fn applying_an_empty_range_produces_nothing() {
    let response = router(make_app_state())
        .oneshot(json_request(
            "POST",
            "/schedule-templates/tpl-1/apply",
            serde_json::json!({"start_date": "2024-01-01", "end_date": "2024-01-01"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await, serde_json::json!([]));
}
