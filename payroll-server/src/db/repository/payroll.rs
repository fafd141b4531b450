//! Payroll Repository

use super::{RepoError, RepoResult};
use shared::models::{EmployeeSummary, Payroll, PayrollStatus, PayrollWithEmployee};
use sqlx::SqlitePool;

const PAYROLL_SELECT: &str = "SELECT id, employee_id, month, year, basic_salary, allowances, deductions, tax, net_salary, status, created_at, updated_at FROM payroll";

const PAYROLL_WITH_EMPLOYEE_SELECT: &str = "SELECT p.id, p.employee_id, e.employee_code, e.full_name, e.email, e.salary, p.month, p.year, p.basic_salary, p.allowances, p.deductions, p.tax, p.net_salary, p.status, p.created_at, p.updated_at FROM payroll p JOIN employee e ON p.employee_id = e.id";

/// Fully resolved column values written on insert and update
#[derive(Debug, Clone)]
pub struct PayrollWrite {
    pub employee: String,
    pub month: i32,
    pub year: i32,
    pub basic_salary: f64,
    pub allowances: f64,
    pub deductions: f64,
    pub tax: f64,
    pub net_salary: f64,
    pub status: PayrollStatus,
}

#[derive(Debug, sqlx::FromRow)]
struct PayrollJoinRow {
    id: String,
    employee_id: String,
    employee_code: String,
    full_name: String,
    email: String,
    salary: f64,
    month: i32,
    year: i32,
    basic_salary: f64,
    allowances: f64,
    deductions: f64,
    tax: f64,
    net_salary: f64,
    status: PayrollStatus,
    created_at: i64,
    updated_at: i64,
}

impl PayrollJoinRow {
    fn into_view(self, with_salary: bool) -> PayrollWithEmployee {
        PayrollWithEmployee {
            id: self.id,
            employee: EmployeeSummary {
                id: self.employee_id,
                employee_id: self.employee_code,
                full_name: self.full_name,
                email: self.email,
                salary: with_salary.then_some(self.salary),
            },
            month: self.month,
            year: self.year,
            basic_salary: self.basic_salary,
            allowances: self.allowances,
            deductions: self.deductions,
            tax: self.tax,
            net_salary: self.net_salary,
            status: self.status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// All payrolls with their employee expanded (without salary)
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<PayrollWithEmployee>> {
    let sql = format!("{PAYROLL_WITH_EMPLOYEE_SELECT} ORDER BY p.created_at, p.id");
    let rows = sqlx::query_as::<_, PayrollJoinRow>(&sql)
        .fetch_all(pool)
        .await?;
    Ok(rows.into_iter().map(|r| r.into_view(false)).collect())
}

/// One payroll with its employee expanded, salary included
pub async fn find_with_employee(
    pool: &SqlitePool,
    id: &str,
) -> RepoResult<Option<PayrollWithEmployee>> {
    let sql = format!("{PAYROLL_WITH_EMPLOYEE_SELECT} WHERE p.id = ?");
    let row = sqlx::query_as::<_, PayrollJoinRow>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row.map(|r| r.into_view(true)))
}

pub async fn find_by_id(pool: &SqlitePool, id: &str) -> RepoResult<Option<Payroll>> {
    let sql = format!("{PAYROLL_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, Payroll>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn find_by_employee(pool: &SqlitePool, employee_id: &str) -> RepoResult<Vec<Payroll>> {
    let sql = format!("{PAYROLL_SELECT} WHERE employee_id = ? ORDER BY year, month, created_at");
    let rows = sqlx::query_as::<_, Payroll>(&sql)
        .bind(employee_id)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn create(pool: &SqlitePool, data: &PayrollWrite) -> RepoResult<Payroll> {
    let now = shared::util::now_millis();
    let id = shared::util::object_id();
    sqlx::query(
        "INSERT INTO payroll (id, employee_id, month, year, basic_salary, allowances, deductions, tax, net_salary, status, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?11)",
    )
    .bind(&id)
    .bind(&data.employee)
    .bind(data.month)
    .bind(data.year)
    .bind(data.basic_salary)
    .bind(data.allowances)
    .bind(data.deductions)
    .bind(data.tax)
    .bind(data.net_salary)
    .bind(data.status)
    .bind(now)
    .execute(pool)
    .await?;
    find_by_id(pool, &id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create payroll".into()))
}

pub async fn update(pool: &SqlitePool, id: &str, data: &PayrollWrite) -> RepoResult<Payroll> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE payroll SET employee_id = ?1, month = ?2, year = ?3, basic_salary = ?4, allowances = ?5, deductions = ?6, tax = ?7, net_salary = ?8, status = ?9, updated_at = ?10 WHERE id = ?11",
    )
    .bind(&data.employee)
    .bind(data.month)
    .bind(data.year)
    .bind(data.basic_salary)
    .bind(data.allowances)
    .bind(data.deductions)
    .bind(data.tax)
    .bind(data.net_salary)
    .bind(data.status)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Payroll {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Payroll {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: &str) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM payroll WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}
