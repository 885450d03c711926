use crate::db::models::User;
use crate::db::not_found_for;
use crate::db::pool::SqlitePool;
use crate::db::schema::USER_TABLE;
use crate::error::RecapError;
use tracing::warn;

#[derive(Clone)]
pub struct UserStore {
    pool: SqlitePool,
}

impl UserStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> Result<Vec<User>, RecapError> {
        let sql = format!("SELECT id, username, password FROM {USER_TABLE} ORDER BY id");
        sqlx::query_as::<_, User>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(RecapError::from)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<User, RecapError> {
        let sql = format!("SELECT id, username, password FROM {USER_TABLE} WHERE id = ?");
        sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(not_found_for(id))
    }

    /// Plaintext credential match; absence surfaces as `NotFound` keyed by username.
    pub async fn find_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<User, RecapError> {
        let sql = format!(
            "SELECT id, username, password FROM {USER_TABLE} WHERE username = ? AND password = ?"
        );
        sqlx::query_as::<_, User>(&sql)
            .bind(username)
            .bind(password)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::RowNotFound => RecapError::NotFound(username.to_string()),
                other => {
                    warn!(username, error = %other, "Error loading user from database");
                    RecapError::Database(other)
                }
            })
    }

    /// Returns the generated id.
    pub async fn insert(&self, user: &User) -> Result<i64, RecapError> {
        let sql = format!("INSERT INTO {USER_TABLE} (username, password) VALUES (?, ?)");
        let result = sqlx::query(&sql)
            .bind(&user.username)
            .bind(&user.password)
            .execute(&self.pool)
            .await?;
        Ok(result.last_insert_rowid())
    }

    /// Returns the number of rows changed.
    pub async fn update(&self, id: i64, user: &User) -> Result<u64, RecapError> {
        let sql = format!("UPDATE {USER_TABLE} SET username = ?, password = ? WHERE id = ?");
        let result = sqlx::query(&sql)
            .bind(&user.username)
            .bind(&user.password)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Returns the number of rows removed.
    pub async fn delete(&self, id: i64) -> Result<u64, RecapError> {
        let sql = format!("DELETE FROM {USER_TABLE} WHERE id = ?");
        let result = sqlx::query(&sql)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
