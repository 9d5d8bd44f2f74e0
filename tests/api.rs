#[macro_use]
mod common;

use actix_web::{http::StatusCode, http::header, test};
use chrono::Datelike;
use serde_json::{Value, json};

use common::{at, state, today};

fn new_worker(name: &str, code: &str, rate: f64) -> test::TestRequest {
    test::TestRequest::post()
        .uri("/api/workers")
        .set_json(json!({ "name": name, "worker_id": code, "daily_wage_rate": rate }))
}

macro_rules! create {
    ($app:expr, $name:expr, $code:expr, $rate:expr) => {{
        let resp = test::call_service(&$app, new_worker($name, $code, $rate).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        body
    }};
}

#[actix_web::test]
async fn root_reports_service_name() {
    let state = state().await;
    let app = test_app!(state);

    let body: Value = test::call_and_read_body_json(&app, test::TestRequest::get().uri("/api").to_request()).await;
    assert_eq!(body, json!({ "message": "WageFlow API" }));
}

#[actix_web::test]
async fn worker_lifecycle() {
    let state = state().await;
    let app = test_app!(state);

    let asha = create!(app, "Asha", "W001", 500.0);
    let id = asha["id"].as_str().unwrap().to_string();
    assert_eq!(asha["worker_id"], "W001");
    assert!(asha["created_at"].is_string());

    let listed: Vec<Value> =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri("/api/workers").to_request()).await;
    assert_eq!(listed.len(), 1);

    // Code changes are ignored, everything else applies
    let req = test::TestRequest::put()
        .uri(&format!("/api/workers/{id}"))
        .set_json(json!({ "name": "Asha Devi", "worker_id": "W999", "daily_wage_rate": 650.0 }))
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated["name"], "Asha Devi");
    assert_eq!(updated["worker_id"], "W001");
    assert_eq!(updated["daily_wage_rate"], 650.0);

    let req = test::TestRequest::delete().uri(&format!("/api/workers/{id}")).to_request();
    let deleted: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(deleted, json!({ "message": "Worker deleted successfully" }));

    let resp = test::call_service(&app, test::TestRequest::get().uri(&format!("/api/workers/{id}")).to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "detail": "Worker not found" }));
}

#[actix_web::test]
async fn duplicate_codes_are_rejected() {
    let state = state().await;
    let app = test_app!(state);

    create!(app, "Asha", "W001", 500.0);

    for code in ["W001", "w001"] {
        let req = new_worker("Ravi", code, 450.0).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["detail"], "Worker ID already exists");
    }
}

#[actix_web::test]
async fn deleted_code_can_be_reused() {
    let state = state().await;
    let app = test_app!(state);

    let first = create!(app, "Asha", "W001", 500.0);
    let req = test::TestRequest::delete()
        .uri(&format!("/api/workers/{}", first["id"].as_str().unwrap()))
        .to_request();
    assert!(test::call_service(&app, req).await.status().is_success());

    let second = create!(app, "Ravi", "W001", 450.0);
    assert_ne!(second["id"], first["id"]);
}

#[actix_web::test]
async fn codes_missing_from_the_index_are_still_unique() {
    let state = state().await;
    let app = test_app!(state);

    // Row written behind the index's back, as if warmup had not reached it yet
    sqlx::query(
        "INSERT INTO workers (id, name, worker_id, daily_wage_rate, created_at) \
         VALUES ('legacy', 'Meena', 'W050', 450.0, '2026-01-01T00:00:00Z')",
    )
    .execute(&state.pool)
    .await
    .unwrap();

    let resp = test::call_service(&app, new_worker("Ravi", "w050", 400.0).to_request()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["detail"], "Worker ID already exists");

    let req = test::TestRequest::delete().uri("/api/workers/legacy").to_request();
    assert!(test::call_service(&app, req).await.status().is_success());

    create!(app, "Ravi", "W050", 400.0);
}

#[actix_web::test]
async fn malformed_body_uses_detail_shape() {
    let state = state().await;
    let app = test_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/workers")
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload("{\"name\": 1}")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["detail"].is_string());
}

#[actix_web::test]
async fn marking_attendance_computes_wage() {
    let state = state().await;
    let app = test_app!(state);

    let asha = create!(app, "Asha", "W001", 500.0);
    let id = asha["id"].as_str().unwrap();

    let req = test::TestRequest::post()
        .uri("/api/attendance")
        .set_json(json!({ "worker_id": id, "clock_in": at("09:00"), "clock_out": at("12:20") }))
        .to_request();
    let record: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(record["status"], "present");
    assert_eq!(record["hours_worked"], 3.33);
    assert_eq!(record["wage_earned"], 208.33);
    assert_eq!(record["worker_name"], "Asha");
    assert_eq!(record["date"], today().format("%Y-%m-%d").to_string());

    // Marking again replaces the day's record
    let req = test::TestRequest::post()
        .uri("/api/attendance")
        .set_json(json!({ "worker_id": "W001", "clock_in": at("09:00"), "clock_out": at("17:00") }))
        .to_request();
    let record: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(record["hours_worked"], 8.0);
    assert_eq!(record["wage_earned"], 500.0);

    let todays: Vec<Value> =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri("/api/attendance/today").to_request()).await;
    assert_eq!(todays.len(), 1);

    let history: Vec<Value> = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri(&format!("/api/attendance/worker/{id}")).to_request(),
    )
    .await;
    assert_eq!(history.len(), 1);

    let by_date: Vec<Value> = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/attendance/date/{}", today().format("%Y-%m-%d")))
            .to_request(),
    )
    .await;
    assert_eq!(by_date.len(), 1);
}

#[actix_web::test]
async fn reversed_times_are_rejected() {
    let state = state().await;
    let app = test_app!(state);

    let asha = create!(app, "Asha", "W001", 500.0);

    let req = test::TestRequest::post()
        .uri("/api/attendance")
        .set_json(json!({
            "worker_id": asha["id"],
            "clock_in": at("17:00"),
            "clock_out": at("09:00")
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "detail": "Clock-out time must be after clock-in time" }));
}

#[actix_web::test]
async fn attendance_for_unknown_worker_is_not_found() {
    let state = state().await;
    let app = test_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/attendance")
        .set_json(json!({ "worker_id": "nobody", "clock_in": at("09:00"), "clock_out": at("17:00") }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn bad_date_is_rejected() {
    let state = state().await;
    let app = test_app!(state);

    let req = test::TestRequest::get().uri("/api/attendance/date/2026-13-40").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn deleting_worker_removes_their_attendance() {
    let state = state().await;
    let app = test_app!(state);

    let asha = create!(app, "Asha", "W001", 500.0);
    let id = asha["id"].as_str().unwrap();
    let req = test::TestRequest::post()
        .uri("/api/attendance")
        .set_json(json!({ "worker_id": id, "clock_in": at("09:00"), "clock_out": at("17:00") }))
        .to_request();
    assert!(test::call_service(&app, req).await.status().is_success());

    let req = test::TestRequest::delete().uri(&format!("/api/workers/{id}")).to_request();
    assert!(test::call_service(&app, req).await.status().is_success());

    let (remaining,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM attendance")
        .fetch_one(&state.pool)
        .await
        .unwrap();
    assert_eq!(remaining, 0);
}

#[actix_web::test]
async fn monthly_report_and_export() {
    let state = state().await;
    let app = test_app!(state);

    let asha = create!(app, "Asha", "W001", 500.0);
    create!(app, "Ravi", "W002", 400.0);

    let req = test::TestRequest::post()
        .uri("/api/attendance")
        .set_json(json!({ "worker_id": asha["id"], "clock_in": at("09:00"), "clock_out": at("17:00") }))
        .to_request();
    assert!(test::call_service(&app, req).await.status().is_success());

    let (year, month) = (today().year(), today().month());
    let rows: Vec<Value> = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/attendance/monthly/{year}/{month}"))
            .to_request(),
    )
    .await;
    assert_eq!(rows.len(), 2);

    let asha_row = rows.iter().find(|r| r["worker_number"] == "W001").unwrap();
    assert_eq!(asha_row["present_days"], 1);
    assert_eq!(asha_row["total_hours"], 8.0);
    assert_eq!(asha_row["total_wages"], 500.0);

    let ravi_row = rows.iter().find(|r| r["worker_number"] == "W002").unwrap();
    assert_eq!(ravi_row["total_days"], 0);
    assert_eq!(ravi_row["total_wages"], 0.0);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/attendance/monthly/{year}/{month}/export"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let disposition = resp
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.starts_with("attachment; filename=\"wage_report_"));
    assert!(disposition.ends_with(&format!("_{year}.csv\"")));

    let body = test::read_body(resp).await;
    let csv = String::from_utf8(body.to_vec()).unwrap();
    assert!(csv.starts_with("Worker Name,Worker ID,"));
    assert!(csv.ends_with(",,,,,₹500.00"));
}

#[actix_web::test]
async fn invalid_month_is_rejected() {
    let state = state().await;
    let app = test_app!(state);

    let req = test::TestRequest::get().uri("/api/attendance/monthly/2026/13").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "detail": "Invalid month: 2026-13" }));
}

#[actix_web::test]
async fn unparseable_path_segments_use_detail_shape() {
    let state = state().await;
    let app = test_app!(state);

    for uri in [
        "/api/attendance/monthly/2026/-1",
        "/api/attendance/monthly/2026/abc",
        "/api/attendance/monthly/twenty/3/export",
    ] {
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{uri}");
        let body: Value = test::read_body_json(resp).await;
        assert!(body["detail"].is_string(), "{uri}");
    }
}

#[actix_web::test]
async fn dashboard_counts_today() {
    let state = state().await;
    let app = test_app!(state);

    let asha = create!(app, "Asha", "W001", 500.0);
    create!(app, "Ravi", "W002", 400.0);
    create!(app, "Meena", "W003", 450.0);

    let req = test::TestRequest::post()
        .uri("/api/attendance")
        .set_json(json!({ "worker_id": asha["id"], "clock_in": at("08:00"), "clock_out": at("12:00") }))
        .to_request();
    assert!(test::call_service(&app, req).await.status().is_success());

    let stats: Value =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri("/api/dashboard/stats").to_request()).await;
    assert_eq!(
        stats,
        json!({
            "total_workers": 3,
            "present_today": 1,
            "absent_today": 2,
            "total_hours_today": 4.0,
            "total_wages_today": 250.0
        })
    );
}

#[actix_web::test]
async fn fragments_are_html() {
    let state = state().await;
    let app = test_app!(state);

    for (uri, marker) in [("/fragments/navbar", "<nav"), ("/fragments/footer", "<footer")] {
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let content_type = resp.headers().get(header::CONTENT_TYPE).unwrap().to_str().unwrap().to_string();
        assert!(content_type.starts_with("text/html"));
        let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
        assert!(body.contains(marker), "{uri} should contain {marker}");
    }
}
