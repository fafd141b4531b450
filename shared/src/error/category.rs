//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 1xxx: Authentication errors
/// - 2xxx: Permission errors
/// - 3xxx: Employee errors
/// - 4xxx: Payroll errors
/// - 5xxx: Finance errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Authentication errors (1xxx)
    Auth,
    /// Permission errors (2xxx)
    Permission,
    /// Employee errors (3xxx)
    Employee,
    /// Payroll errors (4xxx)
    Payroll,
    /// Finance errors (5xxx)
    Finance,
    /// System errors (9xxx and anything unassigned)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Auth,
            2000..3000 => Self::Permission,
            3000..4000 => Self::Employee,
            4000..5000 => Self::Payroll,
            5000..6000 => Self::Finance,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Auth => "auth",
            Self::Permission => "permission",
            Self::Employee => "employee",
            Self::Payroll => "payroll",
            Self::Finance => "finance",
            Self::System => "system",
        }
    }
}

/// What went wrong, independent of which domain raised it.
///
/// Clients branch on this rather than on individual codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Missing or malformed field
    Validation,
    /// Unique constraint violated (email, employee code, payroll period)
    Duplicate,
    /// Unknown identifier
    NotFound,
    /// Identifier has the wrong shape
    InvalidId,
    /// Bad credentials, bad token or insufficient role
    Auth,
    /// Unexpected persistence or internal failure
    Server,
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }

    /// Get the error kind for this error code
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidId => ErrorKind::InvalidId,
            Self::AlreadyExists
            | Self::DuplicateEmail
            | Self::DuplicateEmployeeId
            | Self::EmailInUse
            | Self::DuplicatePeriod => ErrorKind::Duplicate,
            Self::NotFound
            | Self::EmployeeNotFound
            | Self::PayrollNotFound
            | Self::TransactionNotFound => ErrorKind::NotFound,
            Self::NotAuthenticated
            | Self::InvalidCredentials
            | Self::TokenExpired
            | Self::TokenInvalid
            | Self::PermissionDenied
            | Self::AdminRequired => ErrorKind::Auth,
            Self::Unknown
            | Self::InternalError
            | Self::DatabaseError
            | Self::ConfigError
            | Self::RequestTimeout => ErrorKind::Server,
            Self::Success | Self::ValidationFailed | Self::InvalidRequest => ErrorKind::Validation,
        }
    }
}
