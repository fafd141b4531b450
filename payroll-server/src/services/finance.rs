//! Finance service: transactions and the completed-only summary

use shared::ErrorCode;
use shared::models::{FinancialSummary, Transaction, TransactionCreate, TransactionUpdate};
use sqlx::SqlitePool;

use crate::db::repository::{RepoError, transaction};
use crate::utils::money::{difference, round};
use crate::utils::validation::{validate_reference, validate_required_text};
use crate::{AppError, AppResult};

const MAX_DESCRIPTION_LEN: usize = 500;

fn map_transaction_write_error(err: RepoError) -> AppError {
    match err {
        RepoError::NotFound(_) => AppError::new(ErrorCode::TransactionNotFound),
        RepoError::ForeignKey(_) => AppError::new(ErrorCode::EmployeeNotFound),
        e => e.into(),
    }
}

pub async fn list(pool: &SqlitePool) -> AppResult<Vec<Transaction>> {
    Ok(transaction::find_all(pool).await?)
}

pub async fn get(pool: &SqlitePool, id: &str) -> AppResult<Transaction> {
    transaction::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::TransactionNotFound))
}

fn related_employee(value: Option<&str>) -> AppResult<Option<String>> {
    value
        .map(|related| validate_reference(related, "relatedEmployee"))
        .transpose()
}

pub async fn create(pool: &SqlitePool, mut data: TransactionCreate) -> AppResult<Transaction> {
    validate_required_text(&data.description, "description", MAX_DESCRIPTION_LEN)?;
    data.related_employee = related_employee(data.related_employee.as_deref())?;

    let created = transaction::create(pool, &data)
        .await
        .map_err(map_transaction_write_error)?;
    tracing::info!(
        id = %created.id,
        kind = ?created.kind,
        amount = created.amount,
        status = ?created.status,
        "Transaction created"
    );
    Ok(created)
}

pub async fn update(
    pool: &SqlitePool,
    id: &str,
    mut data: TransactionUpdate,
) -> AppResult<Transaction> {
    if let Some(description) = &data.description {
        validate_required_text(description, "description", MAX_DESCRIPTION_LEN)?;
    }
    data.related_employee = related_employee(data.related_employee.as_deref())?;

    let updated = transaction::update(pool, id, &data)
        .await
        .map_err(map_transaction_write_error)?;
    tracing::info!(id = %updated.id, status = ?updated.status, "Transaction updated");
    Ok(updated)
}

pub async fn delete(pool: &SqlitePool, id: &str) -> AppResult<()> {
    if !transaction::delete(pool, id).await? {
        return Err(AppError::new(ErrorCode::TransactionNotFound));
    }
    tracing::info!(id = %id, "Transaction deleted");
    Ok(())
}

/// Totals over completed transactions only
///
/// Income counts `income`; expenses count `expense` and `salary`. Refunds and
/// non-completed rows are ignored.
pub async fn summary(pool: &SqlitePool) -> AppResult<FinancialSummary> {
    let (income, expenses) = transaction::completed_totals(pool).await?;
    let total_income = round(income)?;
    let total_expenses = round(expenses)?;
    Ok(FinancialSummary {
        total_income,
        total_expenses,
        balance: difference(total_income, total_expenses)?,
    })
}
