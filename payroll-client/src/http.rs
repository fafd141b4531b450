//! HTTP client for the payroll API

use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::client::{AuthResponse, LoginRequest, RegisterRequest, UserInfo};
use shared::error::Empty;
use shared::models::{
    Employee, EmployeeCreate, EmployeeUpdate, FinancialSummary, Payroll, PayrollCreate,
    PayrollUpdate, PayrollWithEmployee, Transaction, TransactionCreate, TransactionUpdate,
};
use shared::{ApiResponse, AppError, ErrorCode};

use crate::{ClientConfig, ClientError, ClientResult};

/// HTTP client, one method per API route
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    config: ClientConfig,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout_duration())
            .build()?;
        Ok(Self { client, config })
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.config.token = Some(token.into());
        self
    }

    pub fn set_token(&mut self, token: Option<String>) {
        self.config.token = token;
    }

    /// Get the current token
    pub fn token(&self) -> Option<&str> {
        self.config.token.as_deref()
    }

    async fn request<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> ClientResult<ApiResponse<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.config.url(path);
        let mut request = self.client.request(method.clone(), &url);
        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        tracing::debug!(method = %method, url = %url, "Sending request");
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Decode the envelope; non-2xx statuses become typed errors
    async fn handle_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> ClientResult<ApiResponse<T>> {
        let status = response.status();
        let text = response.text().await?;

        if status.is_success() {
            return serde_json::from_str(&text).map_err(Into::into);
        }

        let error = serde_json::from_str::<ApiResponse<Value>>(&text)
            .ok()
            .and_then(ApiResponse::into_error)
            .unwrap_or_else(|| AppError::with_message(fallback_code(status), text));

        Err(match status {
            StatusCode::UNAUTHORIZED => ClientError::Unauthorized(error),
            StatusCode::FORBIDDEN => ClientError::Forbidden(error),
            StatusCode::NOT_FOUND => ClientError::NotFound(error),
            s if s.is_client_error() => ClientError::Validation(error),
            _ => ClientError::Internal(error),
        })
    }

    async fn data<T, B>(&self, method: Method, path: &str, body: Option<&B>) -> ClientResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request::<T, B>(method, path, body)
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse(format!("Missing data for {path}")))
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.data::<T, ()>(Method::GET, path, None).await
    }

    async fn delete(&self, path: &str) -> ClientResult<()> {
        self.data::<Empty, ()>(Method::DELETE, path, None).await?;
        Ok(())
    }

    // ========== Health ==========

    /// `GET /health`
    pub async fn health(&self) -> ClientResult<Value> {
        self.get("/health").await
    }

    // ========== Auth API ==========

    /// Register; the returned token is kept for later calls
    pub async fn register(&mut self, req: &RegisterRequest) -> ClientResult<AuthResponse> {
        let auth: AuthResponse = self
            .data(Method::POST, "/api/auth/register", Some(req))
            .await?;
        self.config.token = Some(auth.token.clone());
        Ok(auth)
    }

    /// Login; the returned token is kept for later calls
    pub async fn login(&mut self, email: &str, password: &str) -> ClientResult<AuthResponse> {
        let req = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let auth: AuthResponse = self.data(Method::POST, "/api/auth/login", Some(&req)).await?;
        self.config.token = Some(auth.token.clone());
        Ok(auth)
    }

    /// Logout and drop the local token
    pub async fn logout(&mut self) -> ClientResult<()> {
        self.get::<Empty>("/api/auth/logout").await?;
        self.config.token = None;
        Ok(())
    }

    /// Get current user information
    pub async fn me(&self) -> ClientResult<UserInfo> {
        self.get("/api/auth/me").await
    }

    // ========== Employees ==========

    pub async fn list_employees(&self) -> ClientResult<Vec<Employee>> {
        self.get("/api/employees").await
    }

    pub async fn get_employee(&self, id: &str) -> ClientResult<Employee> {
        self.get(&format!("/api/employees/{id}")).await
    }

    pub async fn create_employee(&self, data: &EmployeeCreate) -> ClientResult<Employee> {
        self.data(Method::POST, "/api/employees", Some(data)).await
    }

    pub async fn update_employee(&self, id: &str, data: &EmployeeUpdate) -> ClientResult<Employee> {
        self.data(Method::PUT, &format!("/api/employees/{id}"), Some(data))
            .await
    }

    pub async fn delete_employee(&self, id: &str) -> ClientResult<()> {
        self.delete(&format!("/api/employees/{id}")).await
    }

    // ========== Payroll ==========

    pub async fn list_payrolls(&self) -> ClientResult<Vec<PayrollWithEmployee>> {
        self.get("/api/payroll").await
    }

    pub async fn get_payroll(&self, id: &str) -> ClientResult<PayrollWithEmployee> {
        self.get(&format!("/api/payroll/{id}")).await
    }

    pub async fn list_employee_payrolls(&self, employee_id: &str) -> ClientResult<Vec<Payroll>> {
        self.get(&format!("/api/payroll/employee/{employee_id}"))
            .await
    }

    pub async fn create_payroll(&self, data: &PayrollCreate) -> ClientResult<Payroll> {
        self.data(Method::POST, "/api/payroll", Some(data)).await
    }

    pub async fn update_payroll(&self, id: &str, data: &PayrollUpdate) -> ClientResult<Payroll> {
        self.data(Method::PUT, &format!("/api/payroll/{id}"), Some(data))
            .await
    }

    pub async fn delete_payroll(&self, id: &str) -> ClientResult<()> {
        self.delete(&format!("/api/payroll/{id}")).await
    }

    // ========== Finance ==========

    pub async fn list_transactions(&self) -> ClientResult<Vec<Transaction>> {
        self.get("/api/finance/transactions").await
    }

    pub async fn get_transaction(&self, id: &str) -> ClientResult<Transaction> {
        self.get(&format!("/api/finance/transactions/{id}")).await
    }

    pub async fn create_transaction(&self, data: &TransactionCreate) -> ClientResult<Transaction> {
        self.data(Method::POST, "/api/finance/transactions", Some(data))
            .await
    }

    pub async fn update_transaction(
        &self,
        id: &str,
        data: &TransactionUpdate,
    ) -> ClientResult<Transaction> {
        self.data(
            Method::PUT,
            &format!("/api/finance/transactions/{id}"),
            Some(data),
        )
        .await
    }

    pub async fn delete_transaction(&self, id: &str) -> ClientResult<()> {
        self.delete(&format!("/api/finance/transactions/{id}")).await
    }

    pub async fn financial_summary(&self) -> ClientResult<FinancialSummary> {
        self.get("/api/finance/summary").await
    }
}

/// Error code used when the body is not an envelope (e.g. a proxy error page)
fn fallback_code(status: StatusCode) -> ErrorCode {
    match status {
        StatusCode::UNAUTHORIZED => ErrorCode::NotAuthenticated,
        StatusCode::FORBIDDEN => ErrorCode::PermissionDenied,
        StatusCode::NOT_FOUND => ErrorCode::NotFound,
        s if s.is_client_error() => ErrorCode::InvalidRequest,
        _ => ErrorCode::InternalError,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_code() {
        assert_eq!(fallback_code(StatusCode::UNAUTHORIZED), ErrorCode::NotAuthenticated);
        assert_eq!(fallback_code(StatusCode::BAD_REQUEST), ErrorCode::InvalidRequest);
        assert_eq!(fallback_code(StatusCode::BAD_GATEWAY), ErrorCode::InternalError);
    }

    #[test]
    fn test_new_keeps_token() {
        let client = HttpClient::new(ClientConfig::new("http://localhost:5000").with_token("abc"))
            .unwrap();
        assert_eq!(client.token(), Some("abc"));
        let client = client.with_token("def");
        assert_eq!(client.token(), Some("def"));
    }
}
