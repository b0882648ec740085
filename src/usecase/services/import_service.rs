use std::path::Path;

use anyhow::Result;

use crate::domain::entities::cell::SalaryCell;
use crate::infra::import::csv::import_wide_csv;
use crate::infra::import::wide::ImportMeta;
use crate::infra::import::xlsx::import_wide_xlsx;

pub struct ImportService {
    meta: ImportMeta,
}

impl ImportService {
    pub fn new(meta: ImportMeta) -> Self {
        Self { meta }
    }

    pub fn meta(&self) -> &ImportMeta {
        &self.meta
    }

    pub fn import_csv(&self, path: &Path) -> Result<Vec<SalaryCell>> {
        import_wide_csv(path, &self.meta)
    }

    pub fn import_xlsx(&self, path: &Path, sheet: Option<&str>) -> Result<Vec<SalaryCell>> {
        import_wide_xlsx(path, sheet, &self.meta)
    }

    /// Dispatches on the file extension; anything but `.xlsx`/`.xls` is read as csv.
    pub fn import_file(&self, path: &Path, sheet: Option<&str>) -> Result<Vec<SalaryCell>> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|s| s.to_ascii_lowercase())
            .unwrap_or_default();
        if ext == "xlsx" || ext == "xls" {
            self.import_xlsx(path, sheet)
        } else {
            self.import_csv(path)
        }
    }
}
