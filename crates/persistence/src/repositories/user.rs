//! User repository for database operations.
//!
//! Email uniqueness is enforced by the `users_email_key` constraint; a
//! violated insert or update surfaces as a database error with SQLSTATE
//! 23505, which the service layer maps to a conflict.

use domain::models::{NewUser, UserUpdate};
use sqlx::{PgConnection, PgPool};

use crate::entities::UserEntity;

const USER_COLUMNS: &str = "id, name, email, password_hash";

/// Pooled read access to the `users` table.
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All users, ordered by name.
    pub async fn list(&self) -> Result<Vec<UserEntity>, sqlx::Error> {
        sqlx::query_as::<_, UserEntity>(&format!(
            "SELECT {} FROM users ORDER BY name",
            USER_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<UserEntity>, sqlx::Error> {
        sqlx::query_as::<_, UserEntity>(&format!(
            "SELECT {} FROM users WHERE id = $1",
            USER_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }
}

/// Fetches a user on the caller's open transaction.
pub async fn fetch(conn: &mut PgConnection, id: i64) -> Result<Option<UserEntity>, sqlx::Error> {
    sqlx::query_as::<_, UserEntity>(&format!(
        "SELECT {} FROM users WHERE id = $1",
        USER_COLUMNS
    ))
    .bind(id)
    .fetch_optional(conn)
    .await
}

/// Inserts a user, returning the generated id (None when the insert had no
/// effect).
pub async fn insert(conn: &mut PgConnection, user: &NewUser) -> Result<Option<i64>, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO users (name, email, password_hash)
        VALUES ($1, $2, $3)
        RETURNING id
        "#,
    )
    .bind(&user.name)
    .bind(&user.email)
    .bind(&user.password_hash)
    .fetch_optional(conn)
    .await
}

/// Applies a fixed update descriptor. The password hash column is only
/// written when the descriptor carries a new hash.
pub async fn update(
    conn: &mut PgConnection,
    id: i64,
    update: &UserUpdate,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE users
        SET name = $1, email = $2,
            password_hash = COALESCE($3, password_hash),
            updated_at = NOW()
        WHERE id = $4
        "#,
    )
    .bind(&update.name)
    .bind(&update.email)
    .bind(&update.password_hash)
    .bind(id)
    .execute(conn)
    .await?;

    Ok(result.rows_affected())
}

/// Deletes a user. Returns the number of rows affected.
pub async fn delete(conn: &mut PgConnection, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(id)
        .execute(conn)
        .await?;

    Ok(result.rows_affected())
}
