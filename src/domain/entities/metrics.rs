pub const FULL_TIME_WEEKLY_HOURS: f64 = 40.0;
pub const WEEKS_PER_YEAR: f64 = 52.0;
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Min, max and upper median over raw amounts.
///
/// An empty batch yields zeros with `count == 0`; check `count` before
/// trusting the other fields.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Statistics {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub median: f64,
}

impl Statistics {
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricParams {
    pub weekly_hours: f64,
    pub bonus_percent: f64,
    pub flat_bonus: f64,
}

impl Default for MetricParams {
    fn default() -> Self {
        Self {
            weekly_hours: FULL_TIME_WEEKLY_HOURS,
            bonus_percent: 0.0,
            flat_bonus: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedMetrics {
    pub monthly: f64,
    pub yearly: f64,
    pub hourly: f64,
    pub effective_monthly: f64,
}
