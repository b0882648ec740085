use std::path::PathBuf;

use crate::domain::entities::cell::SalaryCell;
use crate::usecase::ports::source::{CellSource, SourceError};
use crate::usecase::services::import_service::ImportService;

/// A single wide tariff file exposed as one table.
pub struct WideTableSource {
    pub path: PathBuf,
    pub sheet: Option<String>,
    pub importer: ImportService,
}

impl WideTableSource {
    pub fn new(path: PathBuf, sheet: Option<String>, importer: ImportService) -> Self {
        Self {
            path,
            sheet,
            importer,
        }
    }
}

impl CellSource for WideTableSource {
    fn name(&self) -> String {
        format!("file:{}", self.path.display())
    }

    fn list_tables(&self) -> Result<Vec<String>, SourceError> {
        Ok(vec![self.importer.meta().table_name.clone()])
    }

    fn list_cells(&self, table_name: &str) -> Result<Vec<SalaryCell>, SourceError> {
        if table_name != self.importer.meta().table_name {
            return Ok(Vec::new());
        }
        Ok(self.importer.import_file(&self.path, self.sheet.as_deref())?)
    }
}
