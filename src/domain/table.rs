use chrono::NaiveDate;
use tracing::debug;

use crate::domain::entities::cell::{LookupQuery, LookupResult, SalaryCell};
use crate::domain::entities::grid::{ExportGrid, HeatValue};
use crate::domain::entities::metrics::{DerivedMetrics, MetricParams, Statistics};
use crate::domain::entities::pivot::PivotIndex;
use crate::domain::error::TariffError;
use crate::domain::services::export::project_grid;
use crate::domain::services::heat::heat_grid;
use crate::domain::services::lookup::resolve;
use crate::domain::services::metrics::derive_metrics;
use crate::domain::services::normalize::normalize_cells;
use crate::domain::services::pivot_builder::build_pivot;
use crate::domain::services::statistics::compute_statistics;

pub const VALID_FROM_FORMAT: &str = "%Y-%m-%d";

/// Everything derived from one table's batch. Rebuilt wholesale, never patched.
#[derive(Debug, Clone)]
pub struct TableView {
    pub(crate) table_name: String,
    pub(crate) cells: Vec<SalaryCell>,
    pub(crate) pivot: PivotIndex,
    pub(crate) statistics: Statistics,
    pub(crate) groups: Vec<String>,
    pub(crate) steps: Vec<i64>,
}

impl TableView {
    pub fn build(table_name: &str, cells: &[SalaryCell]) -> Self {
        let cells = normalize_cells(cells);
        let pivot = build_pivot(table_name, &cells);
        let statistics = compute_statistics(&cells);
        let groups = pivot.groups();
        let steps = pivot.steps();
        debug!(
            table = table_name,
            records = cells.len(),
            groups = groups.len(),
            steps = steps.len(),
            "table view built"
        );

        Self {
            table_name: table_name.to_string(),
            cells,
            pivot,
            statistics,
            groups,
            steps,
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Records with normalized groups, in input order.
    pub fn cells(&self) -> &[SalaryCell] {
        &self.cells
    }

    pub fn pivot(&self) -> &PivotIndex {
        &self.pivot
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    pub fn groups(&self) -> &[String] {
        &self.groups
    }

    pub fn steps(&self) -> &[i64] {
        &self.steps
    }

    pub fn record_count(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn latest_valid_from(&self) -> Option<NaiveDate> {
        self.cells
            .iter()
            .filter_map(|cell| {
                NaiveDate::parse_from_str(cell.valid_from.trim(), VALID_FROM_FORMAT).ok()
            })
            .max()
    }

    pub fn lookup(&self, group: &str, step: i64) -> Result<LookupResult, TariffError> {
        let query = LookupQuery::new(group, step)?;
        Ok(resolve(&self.pivot, &query))
    }

    pub fn derive(
        &self,
        group: &str,
        step: i64,
        params: &MetricParams,
    ) -> Result<(SalaryCell, DerivedMetrics), TariffError> {
        let cell = self.lookup(group, step)?.into_result()?;
        let metrics = derive_metrics(cell.amount, params)?;
        Ok((cell, metrics))
    }

    pub fn export(&self) -> ExportGrid {
        project_grid(&self.pivot, &self.groups, &self.steps)
    }

    pub fn heat_grid(&self) -> Vec<Vec<HeatValue>> {
        heat_grid(&self.pivot, &self.groups, &self.steps)
    }
}
