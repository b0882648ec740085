use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::params;

use crate::domain::entities::cell::SalaryCell;
use crate::infra::sqlite::schema::{ensure_salaries_table, open_connection};

pub fn list_tables(db_path: &Path) -> Result<Vec<String>> {
    let conn = open_connection(db_path)?;
    ensure_salaries_table(&conn)?;

    let mut stmt = conn
        .prepare("SELECT DISTINCT table_name FROM salaries ORDER BY table_name ASC")
        .context("failed to prepare tables query")?;
    let tables = stmt
        .query_map([], |row| row.get::<_, String>(0))
        .context("failed to query tables")?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("failed to collect tables")?;

    Ok(tables)
}

pub fn query_cells(db_path: &Path, table_name: &str) -> Result<Vec<SalaryCell>> {
    let conn = open_connection(db_path)?;
    ensure_salaries_table(&conn)?;

    // rowid order keeps the import order, which last-seen-wins depends on
    let mut stmt = conn
        .prepare(
            "SELECT table_name, Entgeltgruppe, Stufe, Salary, valid_from, region
             FROM salaries
             WHERE table_name = ?1
             ORDER BY rowid ASC",
        )
        .context("failed to prepare cells query")?;

    let cells = stmt
        .query_map(params![table_name], |row| {
            Ok(SalaryCell {
                table_name: row.get(0)?,
                group: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
                step: row.get(2)?,
                amount: row.get(3)?,
                valid_from: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
                region: row.get::<_, Option<String>>(5)?.unwrap_or_default(),
            })
        })
        .with_context(|| format!("failed to query cells for table: {table_name}"))?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("failed to collect cells")?;

    Ok(cells)
}
