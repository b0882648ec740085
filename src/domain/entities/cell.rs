use crate::domain::error::TariffError;
use crate::domain::services::normalize::normalize_group;

#[derive(Debug, Clone, PartialEq)]
pub struct SalaryCell {
    pub table_name: String,
    pub group: String,
    pub step: i64,
    pub amount: f64,
    pub valid_from: String,
    pub region: String,
}

impl SalaryCell {
    pub fn new(table_name: &str, group: &str, step: i64, amount: f64) -> Self {
        Self {
            table_name: table_name.to_string(),
            group: group.to_string(),
            step,
            amount,
            valid_from: String::new(),
            region: String::new(),
        }
    }

    pub fn with_validity(mut self, valid_from: &str, region: &str) -> Self {
        self.valid_from = valid_from.to_string();
        self.region = region.to_string();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupQuery {
    group: String,
    step: i64,
}

impl LookupQuery {
    pub fn new(group: &str, step: i64) -> Result<Self, TariffError> {
        if step <= 0 {
            return Err(TariffError::InvalidParameter {
                name: "step",
                value: step.to_string(),
            });
        }
        Ok(Self {
            group: normalize_group(group),
            step,
        })
    }

    pub fn parse(group: &str, step: &str) -> Result<Self, TariffError> {
        let parsed = step
            .trim()
            .parse::<i64>()
            .map_err(|_| TariffError::InvalidParameter {
                name: "step",
                value: step.to_string(),
            })?;
        Self::new(group, parsed)
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn step(&self) -> i64 {
        self.step
    }
}

/// Outcome of resolving a [`LookupQuery`] against a pivot.
///
/// A missing cell is `NotFound`, never a zero amount.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupResult {
    Found(SalaryCell),
    NotFound { group: String, step: i64 },
}

impl LookupResult {
    pub fn is_found(&self) -> bool {
        matches!(self, LookupResult::Found(_))
    }

    pub fn amount(&self) -> Option<f64> {
        match self {
            LookupResult::Found(cell) => Some(cell.amount),
            LookupResult::NotFound { .. } => None,
        }
    }

    pub fn into_result(self) -> Result<SalaryCell, TariffError> {
        match self {
            LookupResult::Found(cell) => Ok(cell),
            LookupResult::NotFound { group, step } => Err(TariffError::NotFound { group, step }),
        }
    }
}
