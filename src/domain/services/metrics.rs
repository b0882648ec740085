use crate::domain::entities::metrics::{
    DerivedMetrics, MetricParams, FULL_TIME_WEEKLY_HOURS, MONTHS_PER_YEAR, WEEKS_PER_YEAR,
};
use crate::domain::error::TariffError;

/// Pro-rates a full-time monthly amount and adds the yearly bonuses.
///
/// `weekly_hours` must be positive; other values are trusted as given and scale
/// the output proportionally.
pub fn derive_metrics(
    base_amount: f64,
    params: &MetricParams,
) -> Result<DerivedMetrics, TariffError> {
    let valid_hours = params.weekly_hours.is_finite() && params.weekly_hours > 0.0;
    if !valid_hours {
        return Err(TariffError::InvalidParameter {
            name: "weekly_hours",
            value: params.weekly_hours.to_string(),
        });
    }

    let monthly = base_amount * (params.weekly_hours / FULL_TIME_WEEKLY_HOURS);
    let yearly =
        monthly * MONTHS_PER_YEAR + monthly * (params.bonus_percent / 100.0) + params.flat_bonus;
    let hourly = yearly / (params.weekly_hours * WEEKS_PER_YEAR);
    let effective_monthly = yearly / MONTHS_PER_YEAR;

    Ok(DerivedMetrics {
        monthly,
        yearly,
        hourly,
        effective_monthly,
    })
}

/// Rounds to whole cents for display.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
