pub const GROUP_HEADER: &str = "Entgeltgruppe";

/// Rectangular group x step projection of a pivot.
///
/// `rows[i].amounts[j]` belongs to `steps[j]`; `None` is a blank cell, never zero.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportGrid {
    pub header_label: String,
    pub steps: Vec<i64>,
    pub rows: Vec<ExportRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportRow {
    pub group: String,
    pub amounts: Vec<Option<f64>>,
}

impl ExportGrid {
    pub fn header(&self) -> Vec<String> {
        let mut header = Vec::with_capacity(self.steps.len() + 1);
        header.push(self.header_label.clone());
        header.extend(self.steps.iter().map(|step| step.to_string()));
        header
    }

    /// Header row followed by one row per group, blanks as empty strings.
    pub fn to_records(&self) -> Vec<Vec<String>> {
        let mut records = Vec::with_capacity(self.rows.len() + 1);
        records.push(self.header());
        for row in &self.rows {
            let mut record = Vec::with_capacity(row.amounts.len() + 1);
            record.push(row.group.clone());
            record.extend(row.amounts.iter().map(|amount| match amount {
                Some(value) => format_amount(*value),
                None => String::new(),
            }));
            records.push(record);
        }
        records
    }

    pub fn amount(&self, group: &str, step: i64) -> Option<f64> {
        let col = self.steps.iter().position(|s| *s == step)?;
        self.rows
            .iter()
            .find(|row| row.group == group)
            .and_then(|row| row.amounts.get(col).copied().flatten())
    }
}

/// Shortest text that parses back to the same value; integral amounts drop the fraction.
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return String::new();
    }
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

pub const HEAT_MIDPOINT: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HeatValue {
    /// Intensity in `[0, 1]`
    Scaled(f64),
    /// Amount or bounds absent
    NoScale,
}

impl HeatValue {
    pub fn intensity(&self) -> Option<f64> {
        match self {
            HeatValue::Scaled(t) => Some(*t),
            HeatValue::NoScale => None,
        }
    }
}
