//! Customer queries

use crate::error::{Result, StorageError};
use pulse_core::types::{Customer, CustomerId};
use sqlx::sqlite::{SqliteExecutor, SqliteRow};
use sqlx::{Row, SqlitePool};

/// Get all customers, most recently created first
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Customer>> {
    let rows = sqlx::query(
        "SELECT id, name, email, company, status, plan, mrr, joined_date, last_active
         FROM customers
         ORDER BY created_at DESC, rowid DESC",
    )
    .fetch_all(pool)
    .await?;

    rows.iter().map(from_row).collect()
}

/// Get a customer by exact id
pub async fn get_by_id(pool: &SqlitePool, id: &CustomerId) -> Result<Option<Customer>> {
    let row = sqlx::query(
        "SELECT id, name, email, company, status, plan, mrr, joined_date, last_active
         FROM customers
         WHERE id = ?",
    )
    .bind(id.as_str())
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(from_row).transpose()
}

/// Insert a customer, stamping it with the current creation time
///
/// Fails with `Invalid` when the record breaks a field invariant and with
/// `Duplicate` when the id is already taken.
pub async fn insert<'e, E>(executor: E, customer: &Customer) -> Result<()>
where
    E: SqliteExecutor<'e>,
{
    customer.validate()?;
    let created_at = chrono::Utc::now().timestamp_millis();

    sqlx::query(
        "INSERT INTO customers (id, name, email, company, status, plan, mrr, joined_date, last_active, created_at)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(customer.id.as_str())
    .bind(&customer.name)
    .bind(&customer.email)
    .bind(&customer.company)
    .bind(customer.status.as_str())
    .bind(customer.plan.as_str())
    .bind(customer.mrr)
    .bind(customer.joined_date)
    .bind(customer.last_active)
    .bind(created_at)
    .execute(executor)
    .await
    .map_err(|e| StorageError::from_insert("customer", customer.id.as_str(), e))?;

    Ok(())
}

/// Number of stored customers
pub async fn count(pool: &SqlitePool) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

fn from_row(row: &SqliteRow) -> Result<Customer> {
    let status: String = row.try_get("status")?;
    let plan: String = row.try_get("plan")?;

    Ok(Customer {
        id: CustomerId::new(row.try_get::<String, _>("id")?),
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        company: row.try_get("company")?,
        status: status
            .parse()
            .map_err(|e| StorageError::corrupt("customer", e))?,
        plan: plan.parse().map_err(|e| StorageError::corrupt("customer", e))?,
        mrr: row.try_get("mrr")?,
        joined_date: row.try_get("joined_date")?,
        last_active: row.try_get("last_active")?,
    })
}
