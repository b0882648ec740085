use std::io::{Read, Write};

use anyhow::{Context, Result};

use crate::domain::entities::grid::{ExportGrid, ExportRow};
use crate::domain::error::TariffError;
use crate::infra::import::wide::parse_amount;

pub const EXPORT_DELIMITER: u8 = b',';

/// csv delimiters are single bytes; non-ASCII characters and line breaks are rejected.
pub fn export_delimiter(delimiter: char) -> Result<u8, TariffError> {
    u8::try_from(delimiter)
        .ok()
        .filter(|byte| byte.is_ascii() && !matches!(*byte, b'\n' | b'\r' | b'"'))
        .ok_or_else(|| TariffError::InvalidParameter {
            name: "delimiter",
            value: delimiter.to_string(),
        })
}

pub fn write_grid_csv<W: Write>(grid: &ExportGrid, writer: W, delimiter: u8) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(writer);
    for record in grid.to_records() {
        writer
            .write_record(&record)
            .context("failed to write export row")?;
    }
    writer.flush().context("failed to flush export")?;
    Ok(())
}

/// Reads a grid written by [`write_grid_csv`]; empty fields come back as absent.
pub fn read_grid_csv<R: Read>(reader: R, delimiter: u8) -> Result<ExportGrid> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut records = reader.records();

    let header = records
        .next()
        .context("export is missing its header row")?
        .context("failed to parse export header")?;
    let header_label = header.get(0).unwrap_or_default().to_string();
    let steps = header
        .iter()
        .skip(1)
        .map(|step| {
            step.trim()
                .parse::<i64>()
                .with_context(|| format!("invalid step header: {step}"))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut rows = Vec::new();
    for record in records {
        let record = record.context("failed to parse export row")?;
        let group = record.get(0).unwrap_or_default().to_string();
        let mut amounts = Vec::with_capacity(steps.len());
        for col in 1..=steps.len() {
            let field = record.get(col).unwrap_or_default();
            if field.trim().is_empty() {
                amounts.push(None);
            } else {
                let amount = parse_amount(field)
                    .with_context(|| format!("invalid amount for group '{group}': {field}"))?;
                amounts.push(Some(amount));
            }
        }
        rows.push(ExportRow { group, amounts });
    }

    Ok(ExportGrid {
        header_label,
        steps,
        rows,
    })
}
