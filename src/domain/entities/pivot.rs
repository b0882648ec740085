use std::collections::{BTreeSet, HashMap};

use crate::domain::services::normalize::normalize_group;
use crate::domain::services::ordering::sort_groups;

/// One folded (group, step) cell plus the provenance of the record that last wrote it.
#[derive(Debug, Clone, PartialEq)]
pub struct PivotCell {
    pub amount: f64,
    pub valid_from: String,
    pub region: String,
}

/// Group -> step -> cell index built from one table's records.
///
/// Never patched in place: any change to the input batch means a fresh
/// [`crate::domain::services::pivot_builder::build_pivot`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PivotIndex {
    pub(crate) table_name: String,
    pub(crate) cells: HashMap<String, HashMap<i64, PivotCell>>,
    pub(crate) min_amount: Option<f64>,
    pub(crate) max_amount: Option<f64>,
    pub(crate) duplicates: usize,
    pub(crate) rejected: usize,
}

impl PivotIndex {
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn min_amount(&self) -> Option<f64> {
        self.min_amount
    }

    pub fn max_amount(&self) -> Option<f64> {
        self.max_amount
    }

    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    pub fn rejected(&self) -> usize {
        self.rejected
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of distinct (group, step) cells.
    pub fn len(&self) -> usize {
        self.cells.values().map(HashMap::len).sum()
    }

    pub fn cell(&self, group: &str, step: i64) -> Option<&PivotCell> {
        self.cells
            .get(&normalize_group(group))
            .and_then(|steps| steps.get(&step))
    }

    pub fn amount(&self, group: &str, step: i64) -> Option<f64> {
        self.cell(group, step).map(|cell| cell.amount)
    }

    pub fn contains_group(&self, group: &str) -> bool {
        self.cells.contains_key(&normalize_group(group))
    }

    pub fn groups(&self) -> Vec<String> {
        let mut groups: Vec<String> = self.cells.keys().cloned().collect();
        sort_groups(&mut groups);
        groups
    }

    pub fn steps(&self) -> Vec<i64> {
        self.cells
            .values()
            .flat_map(|steps| steps.keys().copied())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn steps_for(&self, group: &str) -> Option<Vec<i64>> {
        self.cells.get(&normalize_group(group)).map(|steps| {
            let mut keys: Vec<i64> = steps.keys().copied().collect();
            keys.sort_unstable();
            keys
        })
    }

    /// Flattened (group, step, amount) triples in display order.
    pub fn entries(&self) -> Vec<(String, i64, f64)> {
        let mut out = Vec::with_capacity(self.len());
        for group in self.groups() {
            if let Some(steps) = self.steps_for(&group) {
                for step in steps {
                    if let Some(amount) = self.amount(&group, step) {
                        out.push((group.clone(), step, amount));
                    }
                }
            }
        }
        out
    }
}
