//! User Repository Implementation
//!
//! PostgreSQL implementation of the UserRepository trait.
//! Every operation issues exactly one statement against the `users` table.

use std::time::Instant;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{User, UserRepository};
use crate::infrastructure::metrics;
use crate::shared::error::AppError;

/// Database row representation matching the users table schema.
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: i64,
    name: String,
    age: i32,
}

impl UserRow {
    fn into_user(self) -> User {
        User {
            id: self.id,
            name: self.name,
            age: self.age,
        }
    }
}

/// PostgreSQL user repository implementation.
///
/// Provides CRUD operations for users against a PostgreSQL database.
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    /// Fetch all users, ordered by id.
    async fn find_all(&self) -> Result<Vec<User>, AppError> {
        let started = Instant::now();
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, age
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        metrics::record_db_query("select_all", started.elapsed().as_secs_f64());

        Ok(rows.into_iter().map(|r| r.into_user()).collect())
    }

    /// Find a user by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let started = Instant::now();
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, age
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        metrics::record_db_query("select_by_id", started.elapsed().as_secs_f64());

        Ok(row.map(|r| r.into_user()))
    }

    /// Insert a new user. The id column is sequence-assigned; the input
    /// id is never written.
    async fn create(&self, user: &User) -> Result<User, AppError> {
        let started = Instant::now();
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (name, age)
            VALUES ($1, $2)
            RETURNING id, name, age
            "#,
        )
        .bind(&user.name)
        .bind(user.age)
        .fetch_one(&self.pool)
        .await?;
        metrics::record_db_query("insert", started.elapsed().as_secs_f64());

        Ok(row.into_user())
    }

    /// Replace name/age for an existing user.
    async fn update(&self, user: &User) -> Result<User, AppError> {
        let started = Instant::now();
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            UPDATE users
            SET name = $2,
                age = $3
            WHERE id = $1
            RETURNING id, name, age
            "#,
        )
        .bind(user.id)
        .bind(&user.name)
        .bind(user.age)
        .fetch_optional(&self.pool)
        .await?;
        metrics::record_db_query("update", started.elapsed().as_secs_f64());

        row.map(|r| r.into_user())
            .ok_or_else(|| AppError::NotFound(format!("User with id {} not found", user.id)))
    }

    /// Delete a user by id.
    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let started = Instant::now();
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        metrics::record_db_query("delete", started.elapsed().as_secs_f64());

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("User with id {} not found", id)));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_row_maps_to_entity() {
        let row = UserRow {
            id: 7,
            name: "John Doe".into(),
            age: 25,
        };

        let user = row.into_user();
        assert_eq!(user.id, 7);
        assert_eq!(user.name, "John Doe");
        assert_eq!(user.age, 25);
    }
}
