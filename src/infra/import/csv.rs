use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::domain::entities::cell::SalaryCell;
use crate::infra::import::wide::{melt_wide_rows, ImportMeta};

pub const WIDE_CSV_DELIMITER: u8 = b';';

pub fn read_wide_csv(csv_path: &Path, delimiter: u8) -> Result<(Vec<String>, Vec<Vec<String>>)> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_path(csv_path)
        .with_context(|| format!("failed to open csv: {}", csv_path.display()))?;
    let headers: Vec<String> = reader
        .headers()
        .with_context(|| format!("failed to read headers from csv: {}", csv_path.display()))?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').to_string())
        .collect();

    if headers.is_empty() {
        anyhow::bail!("csv header is required")
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.context("failed to parse csv record")?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok((headers, rows))
}

pub fn import_wide_csv(csv_path: &Path, meta: &ImportMeta) -> Result<Vec<SalaryCell>> {
    let (headers, rows) = read_wide_csv(csv_path, WIDE_CSV_DELIMITER)?;
    let cells = melt_wide_rows(&headers, &rows, meta)
        .with_context(|| format!("failed to import csv: {}", csv_path.display()))?;
    info!(
        table = %meta.table_name,
        rows = cells.len(),
        path = %csv_path.display(),
        "imported wide csv"
    );
    Ok(cells)
}
