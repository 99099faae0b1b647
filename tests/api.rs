//! HTTP integration tests. Each test drives the router in-process against its
//! own temp database.

mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

use common::TestApp;

fn names(body: &Value) -> Vec<String> {
    body["data"]
        .as_array()
        .expect("data array")
        .iter()
        .map(|r| r["name"].as_str().unwrap_or_default().to_string())
        .collect()
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();
    let response = app.get("/health").await;
    assert_eq!(response.0, StatusCode::OK);
}

#[tokio::test]
async fn test_staff_lifecycle() {
    let app = TestApp::new();
    app.add_staff("Harry").await;
    let arcadia = app.add_staff("Arcadia").await;

    let (status, body) = app.get("/api/v1/staff").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&body), ["Arcadia", "Harry"]);

    let (status, body) = app.post("/api/v1/staff", json!({ "name": "Harry" })).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].is_string());

    let (status, _) = app.post("/api/v1/staff", json!({ "name": "  " })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app.post("/api/v1/staff", json!({ "name": "Tab\tName" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = app.delete(&format!("/api/v1/staff/{arcadia}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["deleted"], true);

    let (status, _) = app.delete(&format!("/api/v1/staff/{arcadia}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_staff_with_roster_conflicts() {
    let app = TestApp::new();
    let (status, _) = app
        .post(
            "/api/v1/roster/bulk",
            json!([{ "staff_name": "Bronson", "date": "2024-03-01", "shift_hours": 6.0 }]),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = app.get("/api/v1/staff").await;
    let id = body["data"][0]["id"].as_i64().unwrap();

    let (status, _) = app.delete(&format!("/api/v1/staff/{id}")).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (_, body) = app.get("/api/v1/staff").await;
    assert_eq!(names(&body), ["Bronson"]);
}

#[tokio::test]
async fn test_roster_import_sets_budget_hours() {
    let app = TestApp::new();
    app.add_staff("Harry").await;

    let (status, body) = app
        .post(
            "/api/v1/roster/bulk",
            json!([
                { "staff_name": "Harry Smith", "date": "01/03/2024", "shift_hours": 6.0 },
                { "staff_name": "Isis", "date": "2024/3/1", "shift_hours": 4.0 },
                { "staff_name": "Isis", "date": "1899-12-31", "shift_hours": 4.0 }
            ]),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["imported"], 2);
    assert_eq!(body["data"]["skipped"], 1);
    assert_eq!(body["data"]["created_staff"], json!(["Isis"]));

    let (status, body) = app.get("/api/v1/budget/2024-03-01").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["total_hours"], 10.0);
    assert_eq!(body["data"]["total_budget"], 0.0);
}

#[tokio::test]
async fn test_invalid_roster_import_writes_nothing() {
    let app = TestApp::new();

    let (status, _) = app
        .post(
            "/api/v1/roster/bulk",
            json!([
                { "staff_name": "Harry", "date": "2024-03-01", "shift_hours": 6.0 },
                { "staff_name": "Isis", "date": "2024-03-01", "shift_hours": -4.0 }
            ]),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = app.get("/api/v1/staff").await;
    assert!(body["data"].as_array().unwrap().is_empty());

    let long = "x".repeat(300);
    let (status, body) = app
        .post(
            "/api/v1/roster/bulk",
            json!([{ "staff_name": long, "date": "2024-03-01", "shift_hours": 6.0 }]),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("100 characters"));

    let (_, body) = app.get("/api/v1/staff").await;
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_budget_upsert_and_bulk() {
    let app = TestApp::new();

    let (status, _) = app
        .post(
            "/api/v1/budget",
            json!({ "date": "2024-03-01", "total_budget": 1000.0, "total_hours": 80.0 }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app
        .post(
            "/api/v1/budget/bulk",
            json!([
                { "date": "2024-03-01", "total_budget": 1200.0 },
                { "date": "2024-03-02", "total_budget": 900.0, "total_hours": 60.0 }
            ]),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["imported"], 2);

    let (_, body) = app.get("/api/v1/budget/2024-03-01").await;
    assert_eq!(body["data"]["total_budget"], 1200.0);
    assert_eq!(body["data"]["total_hours"], 80.0);
    assert_eq!(body["data"]["hourly_rate"], 15.0);

    let (status, _) = app
        .post(
            "/api/v1/budget",
            json!({ "date": "2024-03-01", "total_budget": -5.0 }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app.get("/api/v1/budget/March").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_sales_submission_and_day_records() {
    let app = TestApp::new();
    app.post(
        "/api/v1/roster/bulk",
        json!([
            { "staff_name": "Harry", "date": "2024-03-01", "shift_hours": 10.0 },
            { "staff_name": "Arcadia", "date": "2024-03-01", "shift_hours": 5.0 }
        ]),
    )
    .await;
    app.post(
        "/api/v1/budget",
        json!({ "date": "2024-03-01", "total_budget": 1500.0 }),
    )
    .await;

    let (_, body) = app.get("/api/v1/staff").await;
    let harry = body["data"][1]["id"].as_i64().unwrap();

    let (status, body) = app
        .post(
            "/api/v1/sales",
            json!({
                "staff_id": harry,
                "date": "2024-03-01",
                "shift_hours": 10.0,
                "actual_sales": 1100.0,
                "ips": 1.8
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["target_sales"], 1000.0);

    let (status, body) = app.get("/api/v1/sales/2024-03-01").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&body), ["Arcadia", "Harry"]);
    assert_eq!(body["data"][0]["is_submitted"], false);
    assert_eq!(body["data"][0]["target_sales"], 500.0);
    assert_eq!(body["data"][1]["is_submitted"], true);
    assert_eq!(body["data"][1]["actual_sales"], 1100.0);

    let (status, _) = app
        .post(
            "/api/v1/sales",
            json!({ "staff_id": 999, "date": "2024-03-01", "shift_hours": 1.0, "actual_sales": 0.0 }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app
        .post(
            "/api/v1/sales",
            json!({ "staff_id": harry, "date": "03-2024", "shift_hours": 1.0, "actual_sales": 0.0 }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_monthly_reports() {
    let app = TestApp::new();
    let harry = app.add_staff("Harry").await;

    let (status, body) = app.get("/api/v1/summary/2024/2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["daily_budgets"].as_array().unwrap().len(), 29);
    assert_eq!(body["data"]["staff"][0]["total_sales"], 0.0);

    let (status, body) = app.get("/api/v1/details/2024/4").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 30);

    let (status, body) = app.get(&format!("/api/v1/tracker/{harry}/2024/5")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["weeks"].as_array().unwrap().len(), 5);
    assert_eq!(body["data"]["weeks"][0]["days"].as_array().unwrap().len(), 5);

    let (status, _) = app.get("/api/v1/tracker/999/2024/5").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.get("/api/v1/summary/2024/13").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_allocate() {
    let app = TestApp::new();

    let (status, body) = app
        .get("/api/v1/allocate?total_budget=1000&total_hours=100&shift_hours=10")
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["target_sales"], 100.0);
    assert_eq!(body["data"]["hourly_rate"], 10.0);

    let (_, body) = app
        .get("/api/v1/allocate?total_budget=0&total_hours=100&shift_hours=10")
        .await;
    assert_eq!(body["data"]["target_sales"], 0.0);

    let (status, _) = app
        .get("/api/v1/allocate?total_budget=1000&total_hours=100&shift_hours=-1")
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
