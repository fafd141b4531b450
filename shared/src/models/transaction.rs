//! Finance Transaction Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Transaction type; `amount` is always a magnitude and this carries the direction
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum TransactionType {
    Income,
    Expense,
    Refund,
    Salary,
}

/// Transaction status. Only `completed` rows count towards the summary.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum TransactionStatus {
    #[default]
    Pending,
    Completed,
    Failed,
}

/// Ledger entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub amount: f64,
    pub description: String,
    pub reference: Option<String>,
    #[cfg_attr(feature = "db", sqlx(rename = "related_employee_id"))]
    pub related_employee: Option<String>,
    pub status: TransactionStatus,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create transaction payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TransactionCreate {
    #[serde(rename = "type")]
    pub kind: TransactionType,
    #[validate(range(min = 0.0, max = 1e12, message = "Amount must be between 0 and 1e12"))]
    pub amount: f64,
    #[validate(length(min = 1, max = 500, message = "Please add a description"))]
    pub description: String,
    #[validate(length(max = 100, message = "Reference is too long"))]
    pub reference: Option<String>,
    pub related_employee: Option<String>,
    pub status: Option<TransactionStatus>,
}

/// Update transaction payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TransactionUpdate {
    #[serde(rename = "type")]
    pub kind: Option<TransactionType>,
    #[validate(range(min = 0.0, max = 1e12, message = "Amount must be between 0 and 1e12"))]
    pub amount: Option<f64>,
    #[validate(length(min = 1, max = 500, message = "Please add a description"))]
    pub description: Option<String>,
    #[validate(length(max = 100, message = "Reference is too long"))]
    pub reference: Option<String>,
    pub related_employee: Option<String>,
    pub status: Option<TransactionStatus>,
}

/// Income/expense totals over completed transactions
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSummary {
    pub total_income: f64,
    pub total_expenses: f64,
    pub balance: f64,
}
