//! Finance Transaction Repository

use super::{RepoError, RepoResult};
use shared::models::{Transaction, TransactionCreate, TransactionStatus, TransactionUpdate};
use sqlx::SqlitePool;

const TRANSACTION_SELECT: &str = "SELECT id, kind, amount, description, reference, related_employee_id, status, created_at, updated_at FROM finance_transaction";

/// Newest first
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Transaction>> {
    let sql = format!("{TRANSACTION_SELECT} ORDER BY created_at DESC, id DESC");
    let rows = sqlx::query_as::<_, Transaction>(&sql)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: &str) -> RepoResult<Option<Transaction>> {
    let sql = format!("{TRANSACTION_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, Transaction>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn create(pool: &SqlitePool, data: &TransactionCreate) -> RepoResult<Transaction> {
    let now = shared::util::now_millis();
    let id = shared::util::object_id();
    sqlx::query(
        "INSERT INTO finance_transaction (id, kind, amount, description, reference, related_employee_id, status, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?8)",
    )
    .bind(&id)
    .bind(data.kind)
    .bind(data.amount)
    .bind(&data.description)
    .bind(&data.reference)
    .bind(&data.related_employee)
    .bind(data.status.unwrap_or_default())
    .bind(now)
    .execute(pool)
    .await?;
    find_by_id(pool, &id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create transaction".into()))
}

pub async fn update(
    pool: &SqlitePool,
    id: &str,
    data: &TransactionUpdate,
) -> RepoResult<Transaction> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE finance_transaction SET kind = COALESCE(?1, kind), amount = COALESCE(?2, amount), description = COALESCE(?3, description), reference = COALESCE(?4, reference), related_employee_id = COALESCE(?5, related_employee_id), status = COALESCE(?6, status), updated_at = ?7 WHERE id = ?8",
    )
    .bind(data.kind)
    .bind(data.amount)
    .bind(&data.description)
    .bind(&data.reference)
    .bind(&data.related_employee)
    .bind(data.status)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Transaction {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Transaction {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: &str) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM finance_transaction WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}

/// Completed income total and completed expense+salary total
pub async fn completed_totals(pool: &SqlitePool) -> RepoResult<(f64, f64)> {
    let totals: (f64, f64) = sqlx::query_as(
        "SELECT COALESCE(SUM(CASE WHEN kind = 'income' THEN amount END), 0.0), COALESCE(SUM(CASE WHEN kind IN ('expense', 'salary') THEN amount END), 0.0) FROM finance_transaction WHERE status = ?",
    )
    .bind(TransactionStatus::Completed)
    .fetch_one(pool)
    .await?;
    Ok(totals)
}
