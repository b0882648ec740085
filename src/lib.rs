pub mod config;
pub mod domain;
pub mod infra;
pub mod usecase;

#[cfg(test)]
mod proptests;

pub use domain::entities::cell::{LookupQuery, LookupResult, SalaryCell};
pub use domain::entities::grid::{ExportGrid, ExportRow, HeatValue};
pub use domain::entities::metrics::{DerivedMetrics, MetricParams, Statistics};
pub use domain::entities::pivot::{PivotCell, PivotIndex};
pub use domain::error::TariffError;
pub use domain::table::TableView;
