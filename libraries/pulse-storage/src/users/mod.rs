//! Dashboard user and credential queries

use crate::error::{Result, StorageError};
use pulse_core::types::{AuthUser, StoredCredentials, UserId};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

/// Create a user with an already-hashed password
///
/// # Arguments
///
/// * `pool` - Database connection pool
/// * `email` - Login email, unique across users
/// * `name` - Display name
/// * `role` - Free-form role label carried in tokens
/// * `password_hash` - bcrypt hash of the password
pub async fn create(
    pool: &SqlitePool,
    email: &str,
    name: &str,
    role: &str,
    password_hash: &str,
) -> Result<AuthUser> {
    let user = AuthUser {
        id: UserId::generate(),
        email: email.to_string(),
        name: name.to_string(),
        role: role.to_string(),
    };

    sqlx::query(
        "INSERT INTO users (id, email, name, role, password_hash, created_at)
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(user.id.as_str())
    .bind(&user.email)
    .bind(&user.name)
    .bind(&user.role)
    .bind(password_hash)
    .bind(chrono::Utc::now().timestamp_millis())
    .execute(pool)
    .await
    .map_err(|e| StorageError::from_insert("user", email, e))?;

    Ok(user)
}

/// Find a user and their password hash by login email
pub async fn find_credentials_by_email(
    pool: &SqlitePool,
    email: &str,
) -> Result<Option<StoredCredentials>> {
    let row = sqlx::query("SELECT id, email, name, role, password_hash FROM users WHERE email = ?")
        .bind(email)
        .fetch_optional(pool)
        .await?;

    row.map(|row| {
        Ok(StoredCredentials {
            user: user_from_row(&row)?,
            password_hash: row.try_get("password_hash")?,
        })
    })
    .transpose()
}

/// Get a user by id
pub async fn get_by_id(pool: &SqlitePool, id: &UserId) -> Result<Option<AuthUser>> {
    let row = sqlx::query("SELECT id, email, name, role FROM users WHERE id = ?")
        .bind(id.as_str())
        .fetch_optional(pool)
        .await?;

    row.as_ref().map(user_from_row).transpose()
}

/// Get all users, ordered by email
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<AuthUser>> {
    let rows = sqlx::query("SELECT id, email, name, role FROM users ORDER BY email")
        .fetch_all(pool)
        .await?;

    rows.iter().map(user_from_row).collect()
}

fn user_from_row(row: &SqliteRow) -> Result<AuthUser> {
    Ok(AuthUser {
        id: UserId::new(row.try_get::<String, _>("id")?),
        email: row.try_get("email")?,
        name: row.try_get("name")?,
        role: row.try_get("role")?,
    })
}
