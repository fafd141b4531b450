mod common;

use common::{TestApp, error_code};
use http::StatusCode;
use payroll_server::ErrorCode;
use serde_json::{Value, json};

async fn setup() -> (TestApp, String, String) {
    let app = TestApp::new().await;
    let token = app.admin_token().await;
    let employee = app.create_employee(&token, "E1", "pay@example.com").await;
    (app, token, employee)
}

fn payroll(employee: &str, month: i32) -> Value {
    json!({
        "employee": employee,
        "month": month,
        "year": 2024,
        "basicSalary": 3000,
        "allowances": 500,
        "deductions": 200,
        "tax": 300,
    })
}

fn assert_net(record: &Value) {
    let expected = record["basicSalary"].as_f64().unwrap() + record["allowances"].as_f64().unwrap()
        - record["deductions"].as_f64().unwrap()
        - record["tax"].as_f64().unwrap();
    assert!(
        (record["netSalary"].as_f64().unwrap() - expected).abs() < 1e-9,
        "net salary mismatch: {record}"
    );
}

#[tokio::test]
async fn test_create_computes_net_and_ignores_client_value() {
    let (app, token, employee) = setup().await;
    let mut body = payroll(&employee, 1);
    body["netSalary"] = json!(999999);

    let (status, body) = app.post("/api/payroll", &token, body).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["netSalary"], 3000.0);
    assert_eq!(body["data"]["status"], "pending");
    assert_eq!(body["data"]["employee"], employee.as_str());
    assert_net(&body["data"]);
}

#[tokio::test]
async fn test_optional_amounts_default_to_zero() {
    let (app, token, employee) = setup().await;
    let (status, body) = app
        .post(
            "/api/payroll",
            &token,
            json!({"employee": employee, "month": 2, "year": 2024, "basicSalary": 1234.56}),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["netSalary"], 1234.56);
}

#[tokio::test]
async fn test_duplicate_period_rejected() {
    let (app, token, employee) = setup().await;
    let (status, _) = app.post("/api/payroll", &token, payroll(&employee, 5)).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = app.post("/api/payroll", &token, payroll(&employee, 5)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), ErrorCode::DuplicatePeriod.code() as u64);
}

#[tokio::test]
async fn test_unknown_employee_rejected() {
    let (app, token, _) = setup().await;
    let (status, body) = app
        .post("/api/payroll", &token, payroll("65a1f0c2e4b0a1b2c3d4e5f6", 1))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_code(&body), ErrorCode::EmployeeNotFound.code() as u64);

    let (status, body) = app.post("/api/payroll", &token, payroll("bogus", 1)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), ErrorCode::InvalidId.code() as u64);
}

#[tokio::test]
async fn test_month_out_of_range_rejected() {
    let (app, token, employee) = setup().await;
    let (status, body) = app.post("/api/payroll", &token, payroll(&employee, 13)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), ErrorCode::ValidationFailed.code() as u64);
}

#[tokio::test]
async fn test_oversized_amounts_rejected() {
    let (app, token, employee) = setup().await;
    let mut body = payroll(&employee, 1);
    body["basicSalary"] = json!(1e29);
    let (status, body) = app.post("/api/payroll", &token, body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), ErrorCode::ValidationFailed.code() as u64);

    let (_, list) = app.get("/api/payroll", &token).await;
    assert_eq!(list["count"], 0);

    let (_, created) = app.post("/api/payroll", &token, payroll(&employee, 2)).await;
    let id = created["data"]["id"].as_str().unwrap();
    let (status, body) = app
        .put(&format!("/api/payroll/{id}"), &token, json!({"tax": 1e30}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), ErrorCode::ValidationFailed.code() as u64);

    let (_, body) = app.get(&format!("/api/payroll/{id}"), &token).await;
    assert_eq!(body["data"]["netSalary"], 3000.0);
}

#[tokio::test]
async fn test_partial_update_recomputes_from_merged_values() {
    let (app, token, employee) = setup().await;
    let (_, created) = app.post("/api/payroll", &token, payroll(&employee, 1)).await;
    let id = created["data"]["id"].as_str().unwrap();

    // only tax changes; the other three come from the stored record
    let (status, body) = app
        .put(&format!("/api/payroll/{id}"), &token, json!({"tax": 100}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["basicSalary"], 3000.0);
    assert_eq!(body["data"]["netSalary"], 3200.0);
    assert_net(&body["data"]);

    let (_, body) = app
        .put(
            &format!("/api/payroll/{id}"),
            &token,
            json!({"basicSalary": 4000.10, "deductions": 0.05}),
        )
        .await;
    assert_eq!(body["data"]["netSalary"], 4400.05);
    assert_net(&body["data"]);
}

#[tokio::test]
async fn test_status_only_update_keeps_net_and_is_free_form() {
    let (app, token, employee) = setup().await;
    let (_, created) = app.post("/api/payroll", &token, payroll(&employee, 1)).await;
    let id = created["data"]["id"].as_str().unwrap();

    for status_value in ["paid", "pending", "processed", "pending"] {
        let (status, body) = app
            .put(
                &format!("/api/payroll/{id}"),
                &token,
                json!({"status": status_value}),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["status"], status_value);
        assert_eq!(body["data"]["netSalary"], 3000.0);
    }
}

#[tokio::test]
async fn test_move_onto_occupied_period_fails() {
    let (app, token, employee) = setup().await;
    app.post("/api/payroll", &token, payroll(&employee, 1)).await;
    let (_, second) = app.post("/api/payroll", &token, payroll(&employee, 2)).await;
    let id = second["data"]["id"].as_str().unwrap();

    let (status, body) = app
        .put(&format!("/api/payroll/{id}"), &token, json!({"month": 1}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), ErrorCode::DuplicatePeriod.code() as u64);
}

#[tokio::test]
async fn test_reassign_to_missing_employee_fails() {
    let (app, token, employee) = setup().await;
    let (_, created) = app.post("/api/payroll", &token, payroll(&employee, 1)).await;
    let id = created["data"]["id"].as_str().unwrap();

    let (status, body) = app
        .put(
            &format!("/api/payroll/{id}"),
            &token,
            json!({"employee": "65a1f0c2e4b0a1b2c3d4e5f6"}),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_code(&body), ErrorCode::EmployeeNotFound.code() as u64);
}

#[tokio::test]
async fn test_list_and_get_expand_employee() {
    let (app, token, employee) = setup().await;
    let (_, created) = app.post("/api/payroll", &token, payroll(&employee, 1)).await;
    let id = created["data"]["id"].as_str().unwrap();

    let (status, body) = app.get("/api/payroll", &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);
    let listed = &body["data"][0]["employee"];
    assert_eq!(listed["id"], employee.as_str());
    assert_eq!(listed["employeeId"], "E1");
    assert_eq!(listed["email"], "pay@example.com");
    assert!(listed.get("salary").is_none());

    let (status, body) = app.get(&format!("/api/payroll/{id}"), &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["employee"]["salary"], 4200.0);
}

#[tokio::test]
async fn test_list_for_employee_is_available_to_any_authenticated_user() {
    let (app, token, employee) = setup().await;
    app.post("/api/payroll", &token, payroll(&employee, 1)).await;
    app.post("/api/payroll", &token, payroll(&employee, 2)).await;

    let (worker_token, _) = app.register("W1", "worker@example.com", "employee").await;
    let (status, body) = app
        .get(&format!("/api/payroll/employee/{employee}"), &worker_token)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 2);
    assert_eq!(body["data"][0]["employee"], employee.as_str());

    let (status, _) = app.get("/api/payroll/employee/not-an-id", &worker_token).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_and_not_found() {
    let (app, token, employee) = setup().await;
    let (_, created) = app.post("/api/payroll", &token, payroll(&employee, 1)).await;
    let id = created["data"]["id"].as_str().unwrap();

    let (status, _) = app.delete(&format!("/api/payroll/{id}"), &token).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app.delete(&format!("/api/payroll/{id}"), &token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_code(&body), ErrorCode::PayrollNotFound.code() as u64);
    assert_eq!(body["error"], "Payroll record not found");
}
