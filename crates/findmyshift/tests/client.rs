use std::collections::HashMap;

use axum::{extract::Query, http::StatusCode, routing::get, Json, Router};
use chrono::NaiveDate;
use findmyshift::{ApiError, Client, ShiftsQuery};
use serde_json::{json, Value};

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

fn authorized(params: &HashMap<String, String>) -> bool {
    params.get("apiKey").map(String::as_str) == Some("secret")
        && params.get("teamId").map(String::as_str) == Some("team-1")
}

async fn staff_list(Query(params): Query<HashMap<String, String>>) -> (StatusCode, Json<Value>) {
    if !authorized(&params) {
        return (StatusCode::FORBIDDEN, Json(json!({ "error": "bad key" })));
    }

    (
        StatusCode::OK,
        Json(json!([
            { "staffId": "1", "displayName": "Ann" },
            { "staffId": "2", "displayName": "Bo" },
        ])),
    )
}

/// Echoes the query back under staff id "1" so tests can inspect it.
async fn shifts_report(
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    if !authorized(&params) {
        return (StatusCode::FORBIDDEN, Json(json!({ "error": "bad key" })));
    }

    (StatusCode::OK, Json(json!({ "1": params })))
}

fn app() -> Router {
    Router::new()
        .route("/staff/list", get(staff_list))
        .route("/reports/shifts", get(shifts_report))
}

#[tokio::test]
async fn fetches_the_staff_list() {
    let base = serve(app()).await;
    let client = Client::with_base_url(&base, "secret", "team-1");

    let staff = client.get_employees().await.unwrap();

    assert_eq!(staff.len(), 2);
    assert_eq!(staff[0].staff_id, "1");
    assert_eq!(staff[1].display_name, "Bo");
}

#[tokio::test]
async fn non_200_carries_the_body() {
    let base = serve(app()).await;
    let client = Client::with_base_url(&base, "wrong", "team-1");

    let error = client.get_employees().await.unwrap_err();

    match error {
        ApiError::Http { status, body } => {
            assert_eq!(status, 403);
            assert!(body.contains("bad key"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn shifts_request_sends_the_window() {
    let base = serve(app()).await;
    let client = Client::with_base_url(&base, "secret", "team-1");

    let query = ShiftsQuery::default()
        .from(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap())
        .to(NaiveDate::from_ymd_opt(2024, 5, 8).unwrap());

    let report = client.get_shifts(query).await.unwrap();
    let echoed = serde_json::to_value(&report).unwrap();

    assert_eq!(echoed["1"]["from"], "2024-05-01");
    assert_eq!(echoed["1"]["to"], "2024-05-08");
    assert_eq!(echoed["1"]["publishedShifts"], "no");
}

#[tokio::test]
async fn employees_without_shifts() {
    let base = serve(app()).await;
    let client = Client::with_base_url(&base, "secret", "team-1");

    let absent = client.get_employees_without_shifts(7).await.unwrap();

    assert_eq!(absent.len(), 1);
    assert_eq!(absent[0].staff_id, "2");
    assert_eq!(absent[0].display_name, "Bo");
}

#[tokio::test]
async fn unreachable_server_is_a_request_error() {
    let client = Client::with_base_url("http://127.0.0.1:9", "secret", "team-1");

    let error = client.get_employees().await.unwrap_err();

    assert!(matches!(error, ApiError::Request(_)));
}
