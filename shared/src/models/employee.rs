//! Employee Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Employee role
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum Role {
    #[default]
    Employee,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Employee => "employee",
            Role::Admin => "admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Employee entity as returned by the API (the password hash is never part of it)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Employee {
    pub id: String,
    /// Human-readable employee code, unique
    #[cfg_attr(feature = "db", sqlx(rename = "employee_code"))]
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub salary: f64,
    pub role: Role,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create employee payload (also the registration payload)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeCreate {
    #[validate(length(min = 1, max = 50, message = "Please add an employee ID"))]
    pub employee_id: String,
    #[validate(length(min = 1, max = 200, message = "Please add a name"))]
    pub full_name: String,
    #[validate(email(message = "Please add a valid email"))]
    pub email: String,
    pub phone_number: String,
    #[validate(range(min = 0.0, max = 1e12, message = "Salary must be between 0 and 1e12"))]
    pub salary: f64,
    #[validate(length(min = 6, max = 128, message = "Password must be at least 6 characters"))]
    pub password: String,
    #[serde(default)]
    pub role: Role,
}

/// Update employee payload
///
/// Absent fields keep their stored value. A present `password` is re-hashed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeUpdate {
    #[validate(length(min = 1, max = 50, message = "Please add an employee ID"))]
    pub employee_id: Option<String>,
    #[validate(length(min = 1, max = 200, message = "Please add a name"))]
    pub full_name: Option<String>,
    #[validate(email(message = "Please add a valid email"))]
    pub email: Option<String>,
    pub phone_number: Option<String>,
    #[validate(range(min = 0.0, max = 1e12, message = "Salary must be between 0 and 1e12"))]
    pub salary: Option<f64>,
    #[validate(length(min = 6, max = 128, message = "Password must be at least 6 characters"))]
    pub password: Option<String>,
    pub role: Option<Role>,
}

/// Employee reference expanded inside payroll views
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeSummary {
    pub id: String,
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    /// Only filled on single-payroll lookups
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_payload() -> EmployeeCreate {
        EmployeeCreate {
            employee_id: "EMP001".into(),
            full_name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            phone_number: "5551234567".into(),
            salary: 5000.0,
            password: "secret1".into(),
            role: Role::Employee,
        }
    }

    #[test]
    fn test_employee_json_has_no_password() {
        let employee = Employee {
            id: "65a1f0c2e4b0a1b2c3d4e5f6".into(),
            employee_id: "EMP001".into(),
            full_name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            phone_number: "5551234567".into(),
            salary: 5000.0,
            role: Role::Admin,
            created_at: 1,
            updated_at: 1,
        };
        let json = serde_json::to_value(&employee).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["employeeId"], "EMP001");
        assert_eq!(json["fullName"], "Ada Lovelace");
        assert_eq!(json["role"], "admin");
    }

    #[test]
    fn test_create_role_defaults_to_employee() {
        let json = r#"{
            "employeeId": "EMP002",
            "fullName": "Grace Hopper",
            "email": "grace@example.com",
            "phoneNumber": "5559876543",
            "salary": 4200,
            "password": "hunter22"
        }"#;
        let payload: EmployeeCreate = serde_json::from_str(json).unwrap();
        assert_eq!(payload.role, Role::Employee);
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn test_create_validation() {
        let mut payload = create_payload();
        payload.email = "not-an-email".into();
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));

        let mut payload = create_payload();
        payload.password = "123".into();
        assert!(payload.validate().is_err());

        let mut payload = create_payload();
        payload.salary = -1.0;
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_update_validates_only_present_fields() {
        assert!(EmployeeUpdate::default().validate().is_ok());

        let update = EmployeeUpdate {
            email: Some("bad".into()),
            ..Default::default()
        };
        assert!(update.validate().is_err());
    }

    #[test]
    fn test_unknown_role_rejected() {
        assert!(serde_json::from_str::<Role>(r#""manager""#).is_err());
        assert_eq!(serde_json::from_str::<Role>(r#""admin""#).unwrap(), Role::Admin);
    }
}
