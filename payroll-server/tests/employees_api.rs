mod common;

use common::{TestApp, employee_payload, error_code};
use http::StatusCode;
use payroll_server::ErrorCode;
use serde_json::json;

#[tokio::test]
async fn test_create_and_list_without_password() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let (status, body) = app
        .post(
            "/api/employees",
            &token,
            employee_payload("E1", "one@example.com", "employee"),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body["data"].get("password").is_none());
    assert!(body["data"].get("passwordHash").is_none());
    assert_eq!(body["data"]["salary"], 4200.0);

    let (status, body) = app.get("/api/employees", &token).await;
    assert_eq!(status, StatusCode::OK);
    // admin + new employee
    assert_eq!(body["count"], 2);
    for employee in body["data"].as_array().unwrap() {
        assert!(employee.get("password").is_none());
    }
}

#[tokio::test]
async fn test_create_duplicate_email() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;
    app.create_employee(&token, "E1", "same@example.com").await;

    let (status, body) = app
        .post(
            "/api/employees",
            &token,
            employee_payload("E2", "same@example.com", "employee"),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), ErrorCode::DuplicateEmail.code() as u64);
}

#[tokio::test]
async fn test_create_validation() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let mut payload = employee_payload("E1", "not-an-email", "employee");
    let (status, body) = app.post("/api/employees", &token, payload.clone()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), ErrorCode::ValidationFailed.code() as u64);

    payload["email"] = json!("ok@example.com");
    payload["salary"] = json!(-1);
    let (status, _) = app.post("/api/employees", &token, payload.clone()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    payload["salary"] = json!(100);
    payload["password"] = json!("123");
    let (status, _) = app.post("/api/employees", &token, payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_invalid_id_is_400_before_lookup() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let (status, body) = app.get("/api/employees/not-a-valid-id", &token).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), ErrorCode::InvalidId.code() as u64);

    let (status, body) = app.delete("/api/employees/1234", &token).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), ErrorCode::InvalidId.code() as u64);
}

#[tokio::test]
async fn test_uppercase_id_finds_existing_record() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;
    let id = app.create_employee(&token, "E1", "upper@example.com").await;
    let upper = id.to_ascii_uppercase();

    let (status, body) = app.get(&format!("/api/employees/{upper}"), &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], id.as_str());

    // body references are stored in their lowercase form
    let (status, body) = app
        .post(
            "/api/payroll",
            &token,
            json!({"employee": upper, "month": 1, "year": 2024, "basicSalary": 1000}),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    assert_eq!(body["data"]["employee"], id.as_str());

    let (status, body) = app
        .get(&format!("/api/payroll/employee/{upper}"), &token)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);

    let (status, _) = app.delete(&format!("/api/employees/{upper}"), &token).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = app.get(&format!("/api/employees/{id}"), &token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_id_is_404() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;
    let missing = "65a1f0c2e4b0a1b2c3d4e5f6";

    let (status, body) = app.get(&format!("/api/employees/{missing}"), &token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_code(&body), ErrorCode::EmployeeNotFound.code() as u64);

    let (status, _) = app
        .put(&format!("/api/employees/{missing}"), &token, json!({"fullName": "X"}))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.delete(&format!("/api/employees/{missing}"), &token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_email_conflicts() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;
    let first = app.create_employee(&token, "E1", "first@example.com").await;
    app.create_employee(&token, "E2", "second@example.com").await;

    // another employee's email
    let (status, body) = app
        .put(
            &format!("/api/employees/{first}"),
            &token,
            json!({"email": "second@example.com"}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), ErrorCode::EmailInUse.code() as u64);
    assert_eq!(body["error"], "Email already in use");

    // own email
    let (status, body) = app
        .put(
            &format!("/api/employees/{first}"),
            &token,
            json!({"email": "first@example.com", "fullName": "Renamed"}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["fullName"], "Renamed");
    assert_eq!(body["data"]["phoneNumber"], "5551234567");
}

#[tokio::test]
async fn test_password_update_is_rehashed() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;
    let id = app.create_employee(&token, "E1", "pw@example.com").await;

    let (status, _) = app
        .put(
            &format!("/api/employees/{id}"),
            &token,
            json!({"password": "brand-new-pass"}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (stored,): (String,) = sqlx::query_as("SELECT password_hash FROM employee WHERE id = ?")
        .bind(&id)
        .fetch_one(app.state.pool())
        .await
        .unwrap();
    assert_ne!(stored, "brand-new-pass");
    assert!(stored.starts_with("$argon2"));

    let (status, _) = app
        .send(
            http::Method::POST,
            "/api/auth/login",
            None,
            Some(json!({"email": "pw@example.com", "password": "brand-new-pass"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_delete_cascades_payrolls_and_detaches_transactions() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;
    let id = app.create_employee(&token, "E1", "gone@example.com").await;

    let (status, payroll) = app
        .post(
            "/api/payroll",
            &token,
            json!({"employee": id, "month": 1, "year": 2024, "basicSalary": 1000}),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let payroll_id = payroll["data"]["id"].as_str().unwrap().to_string();

    let (status, tx) = app
        .post(
            "/api/finance/transactions",
            &token,
            json!({
                "type": "salary",
                "amount": 1000,
                "description": "January pay",
                "relatedEmployee": id,
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let tx_id = tx["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = app.delete(&format!("/api/employees/{id}"), &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!({}));

    let (status, _) = app.get(&format!("/api/payroll/{payroll_id}"), &token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = app
        .get(&format!("/api/finance/transactions/{tx_id}"), &token)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["relatedEmployee"].is_null());
}
