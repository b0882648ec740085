use crate::domain::entities::cell::{LookupQuery, LookupResult, SalaryCell};
use crate::domain::entities::pivot::PivotIndex;

pub fn resolve(pivot: &PivotIndex, query: &LookupQuery) -> LookupResult {
    match pivot.cell(query.group(), query.step()) {
        Some(cell) => LookupResult::Found(SalaryCell {
            table_name: pivot.table_name().to_string(),
            group: query.group().to_string(),
            step: query.step(),
            amount: cell.amount,
            valid_from: cell.valid_from.clone(),
            region: cell.region.clone(),
        }),
        None => LookupResult::NotFound {
            group: query.group().to_string(),
            step: query.step(),
        },
    }
}
