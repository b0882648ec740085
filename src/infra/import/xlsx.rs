use std::path::Path;

use anyhow::{Context, Result};
use calamine::{open_workbook_auto, Data, Reader};
use tracing::info;

use crate::domain::entities::cell::SalaryCell;
use crate::infra::import::wide::{melt_wide_rows, ImportMeta};

pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::String(v) => v.to_string(),
        Data::Float(v) => v.to_string(),
        Data::Int(v) => v.to_string(),
        Data::Bool(v) => v.to_string(),
        Data::DateTime(v) => v.to_string(),
        Data::DateTimeIso(v) => v.to_string(),
        Data::DurationIso(v) => v.to_string(),
        Data::Error(v) => format!("{v:?}"),
        Data::Empty => String::new(),
    }
}

/// Imports one sheet of a wide tariff workbook; the first sheet when `sheet` is `None`.
pub fn import_wide_xlsx(
    xlsx_path: &Path,
    sheet: Option<&str>,
    meta: &ImportMeta,
) -> Result<Vec<SalaryCell>> {
    let mut workbook = open_workbook_auto(xlsx_path)
        .with_context(|| format!("failed to open xlsx: {}", xlsx_path.display()))?;

    let sheet_name = match sheet {
        Some(name) => name.to_string(),
        None => workbook
            .sheet_names()
            .first()
            .cloned()
            .with_context(|| format!("workbook has no sheets: {}", xlsx_path.display()))?,
    };
    let range = workbook
        .worksheet_range(&sheet_name)
        .with_context(|| format!("failed to read sheet: {sheet_name}"))?;

    let mut rows = range
        .rows()
        .map(|r| r.iter().map(cell_to_string).collect::<Vec<String>>());
    let headers = rows
        .next()
        .with_context(|| format!("sheet has no header row: {sheet_name}"))?;
    let rows: Vec<Vec<String>> = rows.collect();

    let cells = melt_wide_rows(&headers, &rows, meta)
        .with_context(|| format!("failed to import sheet: {sheet_name}"))?;
    info!(
        table = %meta.table_name,
        rows = cells.len(),
        sheet = %sheet_name,
        "imported wide xlsx"
    );
    Ok(cells)
}
