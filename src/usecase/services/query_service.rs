use std::io::Write;
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::domain::entities::cell::SalaryCell;
use crate::domain::entities::metrics::{DerivedMetrics, MetricParams};
use crate::domain::table::TableView;
use crate::infra::export::csv::write_grid_csv;
use crate::usecase::ports::source::CellSource;

pub struct QueryService {
    source: Arc<dyn CellSource>,
}

impl QueryService {
    pub fn new(source: Arc<dyn CellSource>) -> Self {
        Self { source }
    }

    pub fn source_name(&self) -> String {
        self.source.name()
    }

    pub fn list_tables(&self) -> Result<Vec<String>> {
        Ok(self.source.list_tables()?)
    }

    /// Fetches the table's records and rebuilds every derived view from scratch.
    pub fn load_table(&self, table_name: &str) -> Result<TableView> {
        let cells = self
            .source
            .list_cells(table_name)
            .with_context(|| format!("failed to load table: {table_name}"))?;
        Ok(TableView::build(table_name, &cells))
    }

    fn load_non_empty(&self, table_name: &str) -> Result<TableView> {
        let view = self.load_table(table_name)?;
        if view.is_empty() {
            anyhow::bail!("no data for table '{table_name}'")
        }
        Ok(view)
    }

    pub fn groups(&self, table_name: &str) -> Result<Vec<String>> {
        let view = self.load_non_empty(table_name)?;
        if view.groups.is_empty() {
            anyhow::bail!("no groups found for table '{table_name}'")
        }
        Ok(view.groups)
    }

    pub fn steps(&self, table_name: &str, group: &str) -> Result<Vec<i64>> {
        let view = self.load_non_empty(table_name)?;
        view.pivot
            .steps_for(group)
            .filter(|steps| !steps.is_empty())
            .with_context(|| {
                format!("no steps found for table '{table_name}', group '{group}'")
            })
    }

    pub fn lookup(&self, table_name: &str, group: &str, step: i64) -> Result<SalaryCell> {
        let view = self.load_table(table_name)?;
        Ok(view.lookup(group, step)?.into_result()?)
    }

    pub fn derive(
        &self,
        table_name: &str,
        group: &str,
        step: i64,
        params: &MetricParams,
    ) -> Result<(SalaryCell, DerivedMetrics)> {
        let view = self.load_table(table_name)?;
        Ok(view.derive(group, step, params)?)
    }

    pub fn export_csv<W: Write>(&self, table_name: &str, writer: W, delimiter: u8) -> Result<()> {
        let view = self.load_non_empty(table_name)?;
        write_grid_csv(&view.export(), writer, delimiter)
    }
}
