//! Shared helpers: an in-process router over an in-memory database

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use payroll_server::{Config, ServerState, build_router};
use serde_json::{Value, json};
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub state: ServerState,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_config(Config::for_testing()).await
    }

    pub async fn with_config(config: Config) -> Self {
        let state = ServerState::initialize(&config).await.unwrap();
        Self {
            router: build_router(state.clone()),
            state,
        }
    }

    /// Send a request and decode the JSON envelope
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {token}"));
        }
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    pub async fn get(&self, path: &str, token: &str) -> (StatusCode, Value) {
        self.send(Method::GET, path, Some(token), None).await
    }

    pub async fn post(&self, path: &str, token: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, path, Some(token), Some(body)).await
    }

    pub async fn put(&self, path: &str, token: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::PUT, path, Some(token), Some(body)).await
    }

    pub async fn delete(&self, path: &str, token: &str) -> (StatusCode, Value) {
        self.send(Method::DELETE, path, Some(token), None).await
    }

    /// Register through the public endpoint; returns `(token, employee id)`
    pub async fn register(&self, code: &str, email: &str, role: &str) -> (String, String) {
        let (status, body) = self
            .send(
                Method::POST,
                "/api/auth/register",
                None,
                Some(employee_payload(code, email, role)),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "register failed: {body}");
        (
            body["data"]["token"].as_str().unwrap().to_string(),
            body["data"]["user"]["id"].as_str().unwrap().to_string(),
        )
    }

    pub async fn admin_token(&self) -> String {
        self.register("ADM001", "admin@example.com", "admin").await.0
    }

    /// Create an employee through the admin API; returns its id
    pub async fn create_employee(&self, token: &str, code: &str, email: &str) -> String {
        let (status, body) = self
            .post("/api/employees", token, employee_payload(code, email, "employee"))
            .await;
        assert_eq!(status, StatusCode::CREATED, "create employee failed: {body}");
        body["data"]["id"].as_str().unwrap().to_string()
    }
}

pub fn employee_payload(code: &str, email: &str, role: &str) -> Value {
    json!({
        "employeeId": code,
        "fullName": format!("Employee {code}"),
        "email": email,
        "phoneNumber": "5551234567",
        "salary": 4200,
        "password": "secret123",
        "role": role,
    })
}

/// Assert the failure envelope shape and return its numeric code
pub fn error_code(body: &Value) -> u64 {
    assert_eq!(body["success"], false, "expected failure: {body}");
    assert!(body["error"].is_string(), "missing error message: {body}");
    assert!(body.get("data").is_none());
    body["code"].as_u64().unwrap()
}
