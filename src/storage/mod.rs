use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;

pub mod capsule_repo;
pub mod letter_repo;
pub mod note_repo;
pub mod records;
pub mod session_repo;
pub mod soul_note_repo;
pub mod user_repo;

pub type DbPool = Pool<Sqlite>;

/// Initializes the database connection pool, creating the database file when missing.
///
/// # Errors
/// Returns `sqlx::Error` if the URL is malformed or the connection fails.
pub async fn init_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new().max_connections(5).connect_with(options).await
}

/// Applies any pending migrations from the `migrations/` directory.
///
/// # Errors
/// Returns `MigrateError` if a migration fails to apply.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!().run(pool).await
}
