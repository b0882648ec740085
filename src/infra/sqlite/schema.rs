use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::{Connection, OpenFlags};

pub const SALARIES_TABLE: &str = "salaries";

pub fn open_connection(db_path: &Path) -> Result<Connection> {
    Connection::open_with_flags(
        db_path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .with_context(|| format!("failed to open db: {}", db_path.display()))
}

pub fn has_salaries_table(conn: &Connection) -> Result<bool> {
    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
            [SALARIES_TABLE],
            |row| row.get(0),
        )
        .context("failed to inspect sqlite_master")?;
    Ok(count > 0)
}

pub fn ensure_salaries_table(conn: &Connection) -> Result<()> {
    if !has_salaries_table(conn)? {
        anyhow::bail!("database table '{SALARIES_TABLE}' not found")
    }
    Ok(())
}
