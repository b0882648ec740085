use std::path::PathBuf;

use tracing::info;

use crate::domain::entities::cell::SalaryCell;
use crate::infra::sqlite::queries::{list_tables, query_cells};
use crate::usecase::ports::source::{CellSource, SourceError};

/// Read-only view of a `salaries` table in a SQLite file.
pub struct SqliteSource {
    pub db_path: PathBuf,
}

impl SqliteSource {
    pub fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }
}

impl CellSource for SqliteSource {
    fn name(&self) -> String {
        format!("sqlite:{}", self.db_path.display())
    }

    fn list_tables(&self) -> Result<Vec<String>, SourceError> {
        if !self.db_path.exists() {
            return Err(SourceError::Message(format!(
                "database not found: {}",
                self.db_path.display()
            )));
        }
        Ok(list_tables(&self.db_path)?)
    }

    fn list_cells(&self, table_name: &str) -> Result<Vec<SalaryCell>, SourceError> {
        if !self.db_path.exists() {
            return Err(SourceError::Message(format!(
                "database not found: {}",
                self.db_path.display()
            )));
        }
        let cells = query_cells(&self.db_path, table_name)?;
        info!(table = table_name, rows = cells.len(), "loaded cells from sqlite");
        Ok(cells)
    }
}
