//! User repository for database operations.

use chrono::NaiveDate;
use sqlx::SqlitePool;

use comanda_core::UserId;

use super::RepositoryError;
use crate::models::user::{NewUser, User};

/// Internal row type for user queries.
///
/// The password column is only ever written, never selected, so it does
/// not appear here.
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: i64,
    name: String,
    role: String,
    date_of_birth: NaiveDate,
    user_name: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: UserId::new(row.id),
            name: row.name,
            role: row.role,
            date_of_birth: row.date_of_birth,
            user_name: row.user_name,
        }
    }
}

const USER_COLUMNS: &str = "id, name, role, date_of_birth, user_name";

/// Map a unique-constraint violation on `user_name` to `Conflict`.
fn map_insert_error(e: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(ref db_err) = e
        && db_err.is_unique_violation()
    {
        return RepositoryError::Conflict("user_name already exists".to_owned());
    }
    RepositoryError::Database(e)
}

/// Repository for user database operations.
pub struct UserRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all users in id order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<User>, RepositoryError> {
        let rows: Vec<UserRow> =
            sqlx::query_as(&format!("SELECT {USER_COLUMNS} FROM users ORDER BY id"))
                .fetch_all(self.pool)
                .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Get a user by their ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        let row: Option<UserRow> =
            sqlx::query_as(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?"))
                .bind(id.as_i64())
                .fetch_optional(self.pool)
                .await?;

        Ok(row.map(Into::into))
    }

    /// Create a new user.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the `user_name` already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(&self, input: &NewUser) -> Result<User, RepositoryError> {
        let row: UserRow = sqlx::query_as(&format!(
            "INSERT INTO users (name, role, date_of_birth, user_name, password) \
             VALUES (?, ?, ?, ?, ?) \
             RETURNING {USER_COLUMNS}"
        ))
        .bind(&input.name)
        .bind(&input.role)
        .bind(input.date_of_birth)
        .bind(&input.user_name)
        .bind(&input.password)
        .fetch_one(self.pool)
        .await
        .map_err(map_insert_error)?;

        Ok(row.into())
    }

    /// Overwrite every mutable field of an existing user.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no user has this id.
    /// Returns `RepositoryError::Conflict` if the new `user_name` is taken.
    pub async fn update(&self, id: UserId, input: &NewUser) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "UPDATE users \
             SET name = ?, role = ?, date_of_birth = ?, user_name = ?, password = ? \
             WHERE id = ?",
        )
        .bind(&input.name)
        .bind(&input.role)
        .bind(input.date_of_birth)
        .bind(&input.user_name)
        .bind(&input.password)
        .bind(id.as_i64())
        .execute(self.pool)
        .await
        .map_err(map_insert_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    /// Delete a user by their ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no user has this id.
    pub async fn delete(&self, id: UserId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id.as_i64())
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
