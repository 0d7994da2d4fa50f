//! Database Connection and Setup
//!
//! Opens the SQLite feedback database and runs migrations.

use rusqlite::Connection;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Connection shared by repositories; SQLite access is serialized
pub type SharedConnection = Arc<Mutex<Connection>>;

/// Open (or create) the database at `db_path`; `:memory:` is accepted
pub fn open_db(db_path: &Path) -> Result<SharedConnection, String> {
    let conn = Connection::open(db_path)
        .map_err(|e| format!("Failed to open db {}: {}", db_path.display(), e))?;

    run_migrations(&conn)?;

    Ok(Arc::new(Mutex::new(conn)))
}

/// Run database migrations
fn run_migrations(conn: &Connection) -> Result<(), String> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS feedback (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            timestamp TEXT NOT NULL,
            name TEXT NOT NULL,
            topic TEXT NOT NULL,
            message TEXT NOT NULL
        )",
        [],
    )
    .map_err(|e| e.to_string())?;

    Ok(())
}
