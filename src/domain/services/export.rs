use crate::domain::entities::grid::{ExportGrid, ExportRow, GROUP_HEADER};
use crate::domain::entities::pivot::PivotIndex;

pub fn project_grid(pivot: &PivotIndex, groups: &[String], steps: &[i64]) -> ExportGrid {
    let rows = groups
        .iter()
        .map(|group| ExportRow {
            group: group.clone(),
            amounts: steps.iter().map(|step| pivot.amount(group, *step)).collect(),
        })
        .collect();

    ExportGrid {
        header_label: GROUP_HEADER.to_string(),
        steps: steps.to_vec(),
        rows,
    }
}

/// Grid in the pivot's own display order (ordered groups, ascending steps).
pub fn project_pivot(pivot: &PivotIndex) -> ExportGrid {
    project_grid(pivot, &pivot.groups(), &pivot.steps())
}
