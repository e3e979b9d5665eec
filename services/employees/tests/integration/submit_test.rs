use axum::http::StatusCode;
use serde_json::{Value, json};

use roster_domain::employee::{Department, EmployeeField};
use roster_domain::validation::local_today;
use roster_testing::employee::{ann_lee, bob_kim, with_field, without_field};

use crate::helpers::{FailingEmployeeRepo, FailingInsertRepo, InMemoryEmployeeRepo, test_server};

fn date_string(date: chrono::NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[tokio::test]
async fn should_store_well_formed_record() {
    let repo = InMemoryEmployeeRepo::default();
    let rows = repo.rows_handle();
    let server = test_server(repo);

    let resp = server.post("/api/employees").json(&ann_lee()).await;

    assert_eq!(resp.status_code(), StatusCode::CREATED);
    let body: Value = resp.json();
    assert_eq!(body["message"], "Employee added successfully.");
    assert_eq!(body["employeeId"], 1);

    let rows = rows.lock().unwrap();
    assert_eq!(rows.len(), 1, "expected exactly one stored row");
    let row = &rows[0];
    assert_eq!(row.first_name, "Ann");
    assert_eq!(row.employee_id, "E1");
    assert_eq!(row.department, Department::Hr);
    assert_eq!(row.country_code, "", "countryCode should default to empty");
}

#[tokio::test]
async fn should_keep_submitted_country_code() {
    let repo = InMemoryEmployeeRepo::default();
    let rows = repo.rows_handle();
    let server = test_server(repo);

    let resp = server.post("/api/employees").json(&bob_kim()).await;

    assert_eq!(resp.status_code(), StatusCode::CREATED);
    assert_eq!(rows.lock().unwrap()[0].country_code, "+1");
}

#[tokio::test]
async fn should_reject_each_missing_required_field() {
    for field in EmployeeField::REQUIRED {
        let repo = InMemoryEmployeeRepo::default();
        let rows = repo.rows_handle();
        let server = test_server(repo);

        for payload in [
            without_field(ann_lee(), field.as_str()),
            with_field(ann_lee(), field.as_str(), ""),
            with_field(ann_lee(), field.as_str(), Value::Null),
        ] {
            let resp = server.post("/api/employees").json(&payload).await;
            assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST, "{field:?}");
            let body: Value = resp.json();
            assert_eq!(body, json!({ "error": "All fields are required." }));
        }
        assert!(rows.lock().unwrap().is_empty(), "{field:?} wrote a row");
    }
}

#[tokio::test]
async fn should_reject_resubmission_naming_all_conflicts() {
    let repo = InMemoryEmployeeRepo::default();
    let rows = repo.rows_handle();
    let server = test_server(repo);

    let first = server.post("/api/employees").json(&ann_lee()).await;
    assert_eq!(first.status_code(), StatusCode::CREATED);

    let second = server.post("/api/employees").json(&ann_lee()).await;
    assert_eq!(second.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = second.json();
    assert_eq!(
        body,
        json!({
            "employeeId": "Employee ID already exists.",
            "email": "Email already exists.",
            "phoneNumber": "Phone number already exists.",
        })
    );
    assert_eq!(rows.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_name_only_the_conflicting_field() {
    let repo = InMemoryEmployeeRepo::default();
    let rows = repo.rows_handle();
    let server = test_server(repo);
    server.post("/api/employees").json(&ann_lee()).await;

    let payload = with_field(bob_kim(), "phoneNumber", "1234567890");
    let resp = server.post("/api/employees").json(&payload).await;

    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json();
    assert_eq!(body, json!({ "phoneNumber": "Phone number already exists." }));
    assert_eq!(rows.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_report_duplicate_caught_by_insert() {
    let repo = InMemoryEmployeeRepo::racing();
    let server = test_server(repo);
    server.post("/api/employees").json(&ann_lee()).await;

    let payload = with_field(bob_kim(), "email", "a@b.com");
    let resp = server.post("/api/employees").json(&payload).await;

    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json();
    assert_eq!(body, json!({ "email": "Email already exists." }));
}

#[tokio::test]
async fn should_accept_joining_today_and_reject_tomorrow() {
    let server = test_server(InMemoryEmployeeRepo::default());
    let today = local_today();
    let tomorrow = today.succ_opt().unwrap();

    let payload = with_field(ann_lee(), "dateOfJoining", date_string(today));
    let resp = server.post("/api/employees").json(&payload).await;
    assert_eq!(resp.status_code(), StatusCode::CREATED);

    let payload = with_field(bob_kim(), "dateOfJoining", date_string(tomorrow));
    let resp = server.post("/api/employees").json(&payload).await;
    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json();
    assert_eq!(
        body,
        json!({ "dateOfJoining": "Date of Joining cannot be a future date" })
    );
}

#[tokio::test]
async fn should_check_phone_number_length_only() {
    let server = test_server(InMemoryEmployeeRepo::default());

    for phone in ["123456789", "12345678901"] {
        let payload = with_field(ann_lee(), "phoneNumber", phone);
        let resp = server.post("/api/employees").json(&payload).await;
        assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST, "{phone}");
    }

    let payload = with_field(ann_lee(), "phoneNumber", "12345abcde");
    let resp = server.post("/api/employees").json(&payload).await;
    assert_eq!(resp.status_code(), StatusCode::CREATED);
}

#[tokio::test]
async fn should_report_every_invalid_field_together() {
    let server = test_server(InMemoryEmployeeRepo::default());
    let payload = with_field(
        with_field(ann_lee(), "email", "not-an-email"),
        "department",
        "Sales",
    );

    let resp = server.post("/api/employees").json(&payload).await;

    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json();
    assert_eq!(
        body,
        json!({
            "email": "Valid Email is required",
            "department": "Department must be one of HR, Engineering, Marketing",
        })
    );
}

#[tokio::test]
async fn should_return_opaque_error_on_storage_failure() {
    let server = test_server(FailingEmployeeRepo);

    let resp = server.post("/api/employees").json(&ann_lee()).await;

    assert_eq!(resp.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = resp.json();
    assert_eq!(body, json!({ "error": "Database query error." }));
}

#[tokio::test]
async fn should_return_opaque_error_when_insert_fails() {
    let server = test_server(FailingInsertRepo);

    let resp = server.post("/api/employees").json(&ann_lee()).await;

    assert_eq!(resp.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = resp.json();
    assert_eq!(body, json!({ "error": "Database query error." }));
}

#[tokio::test]
async fn should_check_duplicates_per_field() {
    let server = test_server(InMemoryEmployeeRepo::default());
    server.post("/api/employees").json(&ann_lee()).await;

    for (name, value, exists) in [
        ("employeeId", "E1", true),
        ("employeeId", "E2", false),
        ("phoneNumber", "1234567890", true),
        ("email", "", false),
    ] {
        let resp = server
            .post("/api/checkDuplicates")
            .json(&json!({ "name": name, "value": value }))
            .await;
        assert_eq!(resp.status_code(), StatusCode::OK);
        let body: Value = resp.json();
        assert_eq!(body, json!({ "exists": exists }), "{name}={value}");
    }
}

#[tokio::test]
async fn should_report_readiness_from_database() {
    let ready = test_server(InMemoryEmployeeRepo::default());
    assert_eq!(ready.get("/readyz").await.status_code(), StatusCode::OK);

    let unready = test_server(FailingEmployeeRepo);
    assert_eq!(
        unready.get("/readyz").await.status_code(),
        StatusCode::SERVICE_UNAVAILABLE
    );
    assert_eq!(unready.get("/healthz").await.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn should_attach_request_id_to_responses() {
    let server = test_server(InMemoryEmployeeRepo::default());
    let resp = server.get("/healthz").await;
    assert!(resp.headers().contains_key("x-request-id"));
}
