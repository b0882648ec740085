use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::debug;

use crate::domain::entities::cell::SalaryCell;
use crate::domain::services::normalize::normalize_group;
use crate::domain::table::VALID_FROM_FORMAT;

pub const GROUP_COLUMN: &str = "Entgeltgruppe";
pub const DEFAULT_REGION: &str = "ALL";
pub const DEFAULT_VALID_FROM: &str = "2025-02-01";

/// Metadata stamped onto every record melted out of a wide table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportMeta {
    pub table_name: String,
    pub region: String,
    pub valid_from: String,
}

impl ImportMeta {
    pub fn new(table_name: &str) -> Self {
        Self {
            table_name: table_name.to_string(),
            region: DEFAULT_REGION.to_string(),
            valid_from: DEFAULT_VALID_FROM.to_string(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.table_name.trim().is_empty() {
            anyhow::bail!("table name is required")
        }
        NaiveDate::parse_from_str(self.valid_from.trim(), VALID_FROM_FORMAT)
            .with_context(|| format!("invalid valid_from date: {}", self.valid_from))?;
        Ok(())
    }
}

/// Parses an amount as printed in tariff tables.
///
/// Accepts `2434.49`, `2434,49`, `2.434,49` and a trailing euro sign. A comma is
/// only read as the decimal mark when it is the last separator, has one or two
/// digits after it and every `.` before it groups thousands. Blanks and anything
/// else, `2,434.49` included, yield `None` so the cell is dropped instead of
/// becoming a wrong amount.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '\u{a0}' && *c != '€')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    let cleaned = if cleaned.contains(',') {
        german_to_plain(&cleaned)?
    } else {
        cleaned
    };
    cleaned.parse::<f64>().ok().filter(|value| value.is_finite())
}

// `1.234.567,8` -> `1234567.8`; `None` unless the German layout is well formed.
fn german_to_plain(value: &str) -> Option<String> {
    let (int_part, frac) = value.rsplit_once(',')?;
    if !(1..=2).contains(&frac.len()) || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };
    let groups: Vec<&str> = digits.split('.').collect();
    let grouped = groups.len() > 1;
    let well_formed = groups.iter().enumerate().all(|(idx, group)| {
        let len_ok = match (idx, grouped) {
            (0, false) => !group.is_empty(),
            (0, true) => (1..=3).contains(&group.len()),
            _ => group.len() == 3,
        };
        len_ok && group.bytes().all(|b| b.is_ascii_digit())
    });
    if !well_formed {
        return None;
    }
    Some(format!("{sign}{}.{frac}", groups.concat()))
}

fn is_step_header(header: &str) -> bool {
    let header = header.trim();
    !header.is_empty() && header.chars().all(|c| c.is_ascii_digit())
}

/// Wide (one column per step) to long (one record per group and step).
///
/// Output order is column-major, matching a melt over the step columns.
pub fn melt_wide_rows(
    headers: &[String],
    rows: &[Vec<String>],
    meta: &ImportMeta,
) -> Result<Vec<SalaryCell>> {
    meta.validate()?;

    let group_idx = headers
        .iter()
        .position(|h| normalize_group(h) == GROUP_COLUMN)
        .with_context(|| format!("missing column: {GROUP_COLUMN}"))?;

    let step_columns: Vec<(usize, i64)> = headers
        .iter()
        .enumerate()
        .filter(|(_, header)| is_step_header(header))
        .filter_map(|(idx, header)| header.trim().parse::<i64>().ok().map(|step| (idx, step)))
        .collect();
    if step_columns.is_empty() {
        anyhow::bail!("no step columns found in header")
    }

    let mut cells = Vec::new();
    let mut dropped = 0_usize;
    for (col_idx, step) in &step_columns {
        for row in rows {
            let group = row.get(group_idx).map(|g| normalize_group(g)).unwrap_or_default();
            if group.is_empty() {
                continue;
            }
            let Some(amount) = row.get(*col_idx).and_then(|value| parse_amount(value)) else {
                dropped += 1;
                continue;
            };
            cells.push(
                SalaryCell::new(&meta.table_name, &group, *step, amount)
                    .with_validity(&meta.valid_from, &meta.region),
            );
        }
    }

    debug!(
        table = %meta.table_name,
        records = cells.len(),
        steps = step_columns.len(),
        dropped,
        "melted wide table"
    );
    Ok(cells)
}
