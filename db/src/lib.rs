use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions},
};
use std::{path::Path, str::FromStr, sync::Arc, time::Duration};

pub mod checklist;
pub mod customer;
pub mod dealership;
pub mod dispute;
pub mod stats;
pub mod testing;
pub mod user;
pub mod vehicle;

pub mod models {
    pub mod customer;
    pub mod dealership;
    pub mod dispute;
    pub mod user;
    pub mod vehicle;
}

pub mod dtos {
    pub mod customer;
    pub mod dealership;
    pub mod dispute;
    pub mod user;
    pub mod vehicle;
}


/// Opens (creating if missing) the SQLite database file and applies the
/// embedded migrations.
pub async fn setup(database_path: &str) -> Result<Arc<SqlitePool>, Box<dyn std::error::Error>> {
    if let Some(parent) = Path::new(database_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let options = SqliteConnectOptions::from_str(&format!("sqlite:{}", database_path))?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .foreign_keys(true)
        .busy_timeout(Duration::from_secs(5));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(Arc::new(pool))
}

/// In-memory database with the full schema, for tests.
pub async fn setup_in_memory() -> Result<Arc<SqlitePool>, Box<dyn std::error::Error>> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(Arc::new(pool))
}
