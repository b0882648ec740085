use crate::domain::entities::cell::SalaryCell;
use crate::domain::entities::metrics::Statistics;

/// Statistics over raw amounts, duplicates included.
///
/// The median is the element at index `n / 2` of the ascending amounts, i.e. the
/// upper median for even counts. It is not the mean of the two middle values.
pub fn compute_statistics(cells: &[SalaryCell]) -> Statistics {
    let mut amounts: Vec<f64> = cells.iter().map(|cell| cell.amount).collect();
    if amounts.is_empty() {
        return Statistics::default();
    }
    amounts.sort_by(f64::total_cmp);

    Statistics {
        count: amounts.len(),
        min: amounts[0],
        max: amounts[amounts.len() - 1],
        median: amounts[amounts.len() / 2],
    }
}
