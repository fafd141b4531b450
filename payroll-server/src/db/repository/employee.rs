//! Employee Repository

use super::{RepoError, RepoResult};
use shared::models::{Employee, EmployeeCreate, EmployeeUpdate, Role};
use sqlx::SqlitePool;

const EMPLOYEE_SELECT: &str = "SELECT id, employee_code, full_name, email, phone_number, salary, role, created_at, updated_at FROM employee";

/// Employee row together with its stored password hash (login only)
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct EmployeeCredentials {
    #[sqlx(flatten)]
    pub employee: Employee,
    pub password_hash: String,
}

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Employee>> {
    let sql = format!("{EMPLOYEE_SELECT} ORDER BY created_at, id");
    let rows = sqlx::query_as::<_, Employee>(&sql).fetch_all(pool).await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: &str) -> RepoResult<Option<Employee>> {
    let sql = format!("{EMPLOYEE_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, Employee>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn find_credentials_by_email(
    pool: &SqlitePool,
    email: &str,
) -> RepoResult<Option<EmployeeCredentials>> {
    let row = sqlx::query_as::<_, EmployeeCredentials>(
        "SELECT id, employee_code, full_name, email, phone_number, salary, role, password_hash, created_at, updated_at FROM employee WHERE email = ?",
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn exists(pool: &SqlitePool, id: &str) -> RepoResult<bool> {
    let row: Option<(i64,)> = sqlx::query_as("SELECT 1 FROM employee WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row.is_some())
}

/// Insert a new employee; `password_hash` must already be hashed
pub async fn create(
    pool: &SqlitePool,
    data: &EmployeeCreate,
    password_hash: &str,
) -> RepoResult<Employee> {
    let now = shared::util::now_millis();
    let id = shared::util::object_id();
    sqlx::query(
        "INSERT INTO employee (id, employee_code, full_name, email, phone_number, salary, password_hash, role, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?9)",
    )
    .bind(&id)
    .bind(&data.employee_id)
    .bind(&data.full_name)
    .bind(&data.email)
    .bind(&data.phone_number)
    .bind(data.salary)
    .bind(password_hash)
    .bind(data.role)
    .bind(now)
    .execute(pool)
    .await?;
    find_by_id(pool, &id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create employee".into()))
}

/// Merge the present fields onto the stored row
pub async fn update(
    pool: &SqlitePool,
    id: &str,
    data: &EmployeeUpdate,
    password_hash: Option<&str>,
) -> RepoResult<Employee> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE employee SET employee_code = COALESCE(?1, employee_code), full_name = COALESCE(?2, full_name), email = COALESCE(?3, email), phone_number = COALESCE(?4, phone_number), salary = COALESCE(?5, salary), password_hash = COALESCE(?6, password_hash), role = COALESCE(?7, role), updated_at = ?8 WHERE id = ?9",
    )
    .bind(&data.employee_id)
    .bind(&data.full_name)
    .bind(&data.email)
    .bind(&data.phone_number)
    .bind(data.salary)
    .bind(password_hash)
    .bind(data.role.map(|r: Role| r.as_str()))
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Employee {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Employee {id} not found")))
}

/// Hard delete; payrolls cascade and transactions are detached by the schema
pub async fn delete(pool: &SqlitePool, id: &str) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM employee WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}
