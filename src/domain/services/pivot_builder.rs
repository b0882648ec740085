use std::collections::HashMap;

use tracing::{debug, warn};

use crate::domain::entities::cell::SalaryCell;
use crate::domain::entities::pivot::{PivotCell, PivotIndex};
use crate::domain::services::normalize::normalize_group;

/// Folds records into a fresh [`PivotIndex`] in one pass.
///
/// Duplicate (group, step) pairs resolve last-seen-wins and are counted; records
/// with a non-positive step are skipped and counted as rejected.
pub fn build_pivot(table_name: &str, cells: &[SalaryCell]) -> PivotIndex {
    let mut index: HashMap<String, HashMap<i64, PivotCell>> = HashMap::new();
    let mut min_amount: Option<f64> = None;
    let mut max_amount: Option<f64> = None;
    let mut duplicates = 0_usize;
    let mut rejected = 0_usize;

    for cell in cells {
        let group = normalize_group(&cell.group);
        if cell.step <= 0 {
            warn!(
                table = table_name,
                group = %group,
                step = cell.step,
                "skipping record with non-positive step"
            );
            rejected += 1;
            continue;
        }

        let previous = index.entry(group.clone()).or_default().insert(
            cell.step,
            PivotCell {
                amount: cell.amount,
                valid_from: cell.valid_from.clone(),
                region: cell.region.clone(),
            },
        );
        if let Some(previous) = previous {
            warn!(
                table = table_name,
                group = %group,
                step = cell.step,
                previous = previous.amount,
                current = cell.amount,
                "duplicate salary cell, keeping last seen"
            );
            duplicates += 1;
        }

        min_amount = Some(min_amount.map_or(cell.amount, |min| min.min(cell.amount)));
        max_amount = Some(max_amount.map_or(cell.amount, |max| max.max(cell.amount)));
    }

    debug!(
        table = table_name,
        records = cells.len(),
        groups = index.len(),
        duplicates,
        rejected,
        "pivot rebuilt"
    );

    PivotIndex {
        table_name: table_name.to_string(),
        cells: index,
        min_amount,
        max_amount,
        duplicates,
        rejected,
    }
}
