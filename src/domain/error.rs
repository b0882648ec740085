use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TariffError {
    /// No cell for the requested group and step
    NotFound { group: String, step: i64 },
    /// Caller-supplied value rejected before any computation
    InvalidParameter { name: &'static str, value: String },
}

impl fmt::Display for TariffError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { group, step } => {
                write!(f, "salary cell not found: group '{group}', step {step}")
            }
            Self::InvalidParameter { name, value } => {
                write!(f, "invalid parameter {name}: {value}")
            }
        }
    }
}

impl std::error::Error for TariffError {}
