//! Report queries

use crate::error::{Result, StorageError};
use pulse_core::types::{Report, ReportId};
use sqlx::sqlite::{SqliteExecutor, SqliteRow};
use sqlx::{Row, SqlitePool};

/// Get all reports, newest `created_at` first
///
/// Dates are stored as `YYYY-MM-DD` text, so lexical order is date order.
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Report>> {
    let rows = sqlx::query(
        "SELECT id, name, report_type, created_at, last_run, status, size
         FROM reports
         ORDER BY created_at DESC, rowid DESC",
    )
    .fetch_all(pool)
    .await?;

    rows.iter().map(from_row).collect()
}

/// Insert a report
pub async fn insert<'e, E>(executor: E, report: &Report) -> Result<()>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query(
        "INSERT INTO reports (id, name, report_type, created_at, last_run, status, size)
         VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(report.id.as_str())
    .bind(&report.name)
    .bind(report.report_type.as_str())
    .bind(report.created_at)
    .bind(report.last_run)
    .bind(report.status.as_str())
    .bind(&report.size)
    .execute(executor)
    .await
    .map_err(|e| StorageError::from_insert("report", report.id.as_str(), e))?;

    Ok(())
}

fn from_row(row: &SqliteRow) -> Result<Report> {
    let report_type: String = row.try_get("report_type")?;
    let status: String = row.try_get("status")?;

    Ok(Report {
        id: ReportId::new(row.try_get::<String, _>("id")?),
        name: row.try_get("name")?,
        report_type: report_type
            .parse()
            .map_err(|e| StorageError::corrupt("report", e))?,
        created_at: row.try_get("created_at")?,
        last_run: row.try_get("last_run")?,
        status: status.parse().map_err(|e| StorageError::corrupt("report", e))?,
        size: row.try_get("size")?,
    })
}
