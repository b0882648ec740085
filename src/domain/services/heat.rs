use crate::domain::entities::grid::{HeatValue, HEAT_MIDPOINT};
use crate::domain::entities::pivot::PivotIndex;

/// `t = (amount - min) / (max - min)` clamped to `[0, 1]`.
///
/// A degenerate range (`min == max`) always maps to the midpoint.
pub fn heat_value(amount: Option<f64>, min: Option<f64>, max: Option<f64>) -> HeatValue {
    let (Some(amount), Some(min), Some(max)) = (amount, min, max) else {
        return HeatValue::NoScale;
    };
    if !amount.is_finite() || !min.is_finite() || !max.is_finite() {
        return HeatValue::NoScale;
    }
    if max == min {
        return HeatValue::Scaled(HEAT_MIDPOINT);
    }
    HeatValue::Scaled(((amount - min) / (max - min)).clamp(0.0, 1.0))
}

pub fn heat_for(pivot: &PivotIndex, group: &str, step: i64) -> HeatValue {
    heat_value(
        pivot.amount(group, step),
        pivot.min_amount(),
        pivot.max_amount(),
    )
}

/// Heat values laid out like the export grid: one row per group, one column per step.
pub fn heat_grid(pivot: &PivotIndex, groups: &[String], steps: &[i64]) -> Vec<Vec<HeatValue>> {
    groups
        .iter()
        .map(|group| steps.iter().map(|step| heat_for(pivot, group, *step)).collect())
        .collect()
}
