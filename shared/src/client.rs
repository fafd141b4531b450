//! Client-related types shared between server and client
//!
//! Request/response types of the auth endpoints.
//! These types are shared between payroll-server and payroll-client.

use crate::models::{Employee, EmployeeCreate, Role};
use serde::{Deserialize, Serialize};
use validator::Validate;

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Please provide an email and password"))]
    pub email: String,
    #[validate(length(min = 1, message = "Please provide an email and password"))]
    pub password: String,
}

/// Registration takes the same fields as admin employee creation
pub type RegisterRequest = EmployeeCreate;

/// Register/login response data
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserInfo,
}

/// Public profile returned alongside a credential
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: String,
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub role: Role,
}

impl UserInfo {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

impl From<&Employee> for UserInfo {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id.clone(),
            employee_id: employee.employee_id.clone(),
            full_name: employee.full_name.clone(),
            email: employee.email.clone(),
            role: employee.role,
        }
    }
}
