use std::sync::Arc;

use tracing::warn;

use crate::domain::entities::cell::SalaryCell;
use crate::usecase::ports::source::{CellSource, SourceError};

/// Answers from `primary`; an error or an empty answer switches to `fallback`.
pub struct FallbackSource {
    primary: Arc<dyn CellSource>,
    fallback: Arc<dyn CellSource>,
}

impl FallbackSource {
    pub fn new(primary: Arc<dyn CellSource>, fallback: Arc<dyn CellSource>) -> Self {
        Self { primary, fallback }
    }
}

impl CellSource for FallbackSource {
    fn name(&self) -> String {
        format!("{} (fallback: {})", self.primary.name(), self.fallback.name())
    }

    fn list_tables(&self) -> Result<Vec<String>, SourceError> {
        match self.primary.list_tables() {
            Ok(tables) if !tables.is_empty() => Ok(tables),
            Ok(_) => {
                warn!(source = %self.primary.name(), "no tables, using fallback source");
                self.fallback.list_tables()
            }
            Err(err) => {
                warn!(source = %self.primary.name(), error = %err, "using fallback source");
                self.fallback.list_tables()
            }
        }
    }

    fn list_cells(&self, table_name: &str) -> Result<Vec<SalaryCell>, SourceError> {
        match self.primary.list_cells(table_name) {
            Ok(cells) if !cells.is_empty() => Ok(cells),
            Ok(_) => {
                warn!(
                    source = %self.primary.name(),
                    table = table_name,
                    "no cells, using fallback source"
                );
                self.fallback.list_cells(table_name)
            }
            Err(err) => {
                warn!(
                    source = %self.primary.name(),
                    table = table_name,
                    error = %err,
                    "using fallback source"
                );
                self.fallback.list_cells(table_name)
            }
        }
    }
}
