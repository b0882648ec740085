use crate::domain::entities::cell::SalaryCell;
use crate::infra::import::wide::{DEFAULT_REGION, DEFAULT_VALID_FROM};
use crate::usecase::ports::source::{CellSource, SourceError};

pub const SAMPLE_TABLE: &str = "TV-L";

// Monthly amounts in euros, steps 1..=6; `None` where the tariff has no step.
const SAMPLE_ROWS: &[(&str, [Option<f64>; 6])] = &[
    ("E 1", [None, Some(2434.49), Some(2472.98), Some(2516.93), Some(2555.42), Some(2654.36)]),
    ("E 2", [Some(2642.84), Some(2853.24), Some(2957.40), Some(3041.56), Some(3237.32), Some(3363.36)]),
    ("E 2Ü", [Some(2829.42), Some(3031.86), Some(3141.05), Some(3224.82), Some(3303.07), Some(3358.87)]),
    ("E 5", [Some(3059.70), Some(3256.71), Some(3399.35), Some(3541.99), Some(3630.89), Some(3719.25)]),
    ("E 9a", [Some(3582.50), Some(3781.82), Some(4019.41), Some(4274.40), Some(4374.86), Some(4654.71)]),
    ("E 9b", [Some(3747.89), Some(4010.92), Some(4174.34), Some(4696.26), Some(5009.39), Some(5154.17)]),
    ("E 13", [Some(4744.68), Some(5142.71), Some(5417.58), Some(5875.25), Some(6484.55), Some(6762.68)]),
    ("E 13Ü", [Some(5009.97), Some(5384.28), Some(5727.64), Some(6286.69), Some(6911.42), Some(7064.17)]),
    ("E 15", [Some(5779.43), Some(6175.56), Some(6405.47), Some(7156.04), Some(7812.56), Some(8103.78)]),
];

pub fn sample_cells() -> Vec<SalaryCell> {
    let mut cells = Vec::new();
    for (group, amounts) in SAMPLE_ROWS {
        for (idx, amount) in amounts.iter().enumerate() {
            if let Some(amount) = amount {
                cells.push(
                    SalaryCell::new(SAMPLE_TABLE, group, idx as i64 + 1, *amount)
                        .with_validity(DEFAULT_VALID_FROM, DEFAULT_REGION),
                );
            }
        }
    }
    cells
}

/// Built-in sample table, used when the configured source is unavailable.
#[derive(Debug, Default)]
pub struct EmbeddedSource;

impl CellSource for EmbeddedSource {
    fn name(&self) -> String {
        "embedded sample".to_string()
    }

    fn list_tables(&self) -> Result<Vec<String>, SourceError> {
        Ok(vec![SAMPLE_TABLE.to_string()])
    }

    fn list_cells(&self, table_name: &str) -> Result<Vec<SalaryCell>, SourceError> {
        if table_name == SAMPLE_TABLE {
            Ok(sample_cells())
        } else {
            Ok(Vec::new())
        }
    }
}
