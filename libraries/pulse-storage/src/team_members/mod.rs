//! Team member queries

use crate::error::{Result, StorageError};
use pulse_core::types::{TeamMember, TeamMemberId};
use sqlx::sqlite::{SqliteExecutor, SqliteRow};
use sqlx::{Row, SqlitePool};

/// Get all team members, most recently created first
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<TeamMember>> {
    let rows = sqlx::query(
        "SELECT id, name, email, role, status, joined_date, avatar
         FROM team_members
         ORDER BY created_at DESC, rowid DESC",
    )
    .fetch_all(pool)
    .await?;

    rows.iter().map(from_row).collect()
}

/// Insert a team member, stamping it with the current creation time
pub async fn insert<'e, E>(executor: E, member: &TeamMember) -> Result<()>
where
    E: SqliteExecutor<'e>,
{
    let created_at = chrono::Utc::now().timestamp_millis();

    sqlx::query(
        "INSERT INTO team_members (id, name, email, role, status, joined_date, avatar, created_at)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(member.id.as_str())
    .bind(&member.name)
    .bind(&member.email)
    .bind(member.role.as_str())
    .bind(member.status.as_str())
    .bind(member.joined_date)
    .bind(member.avatar.as_deref())
    .bind(created_at)
    .execute(executor)
    .await
    .map_err(|e| StorageError::from_insert("team member", member.id.as_str(), e))?;

    Ok(())
}

fn from_row(row: &SqliteRow) -> Result<TeamMember> {
    let role: String = row.try_get("role")?;
    let status: String = row.try_get("status")?;

    Ok(TeamMember {
        id: TeamMemberId::new(row.try_get::<String, _>("id")?),
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        role: role
            .parse()
            .map_err(|e| StorageError::corrupt("team member", e))?,
        status: status
            .parse()
            .map_err(|e| StorageError::corrupt("team member", e))?,
        joined_date: row.try_get("joined_date")?,
        avatar: row.try_get("avatar")?,
    })
}
