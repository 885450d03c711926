use crate::db::schema::SQLITE_INIT;
use crate::error::RecapError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use tracing::info;

pub type SqlitePool = Pool<Sqlite>;

/// Open a pool for `database_url`, creating the file if needed, and bootstrap the schema.
/// Pool sizing is left at the driver defaults.
pub async fn connect(database_url: &str) -> Result<SqlitePool, RecapError> {
    let connect_opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new().connect_with(connect_opts).await?;
    init_schema(&pool).await?;
    info!(database_url = %database_url, "database ready");
    Ok(pool)
}

/// Single-connection in-memory pool. Every connection to `sqlite::memory:` is a
/// separate database, so the pool is pinned to one connection that never expires.
pub async fn connect_in_memory() -> Result<SqlitePool, RecapError> {
    let connect_opts = SqliteConnectOptions::from_str("sqlite::memory:")?;
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(connect_opts)
        .await?;
    init_schema(&pool).await?;
    Ok(pool)
}

/// Execute the bundled DDL one statement at a time.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), RecapError> {
    for stmt in SQLITE_INIT.split(';') {
        let s = stmt.trim();
        if s.is_empty() {
            continue;
        }
        sqlx::query(s).execute(pool).await?;
    }
    Ok(())
}
