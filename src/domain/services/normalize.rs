use crate::domain::entities::cell::SalaryCell;

const NBSP: char = '\u{a0}';

/// Replaces non-breaking spaces and trims, so that `"E\u{a0}15 "` keys as `"E 15"`.
pub fn normalize_group(raw: &str) -> String {
    if raw.contains(NBSP) {
        raw.replace(NBSP, " ").trim().to_string()
    } else {
        raw.trim().to_string()
    }
}

pub fn normalize_cell(cell: &SalaryCell) -> SalaryCell {
    SalaryCell {
        group: normalize_group(&cell.group),
        ..cell.clone()
    }
}

pub fn normalize_cells(cells: &[SalaryCell]) -> Vec<SalaryCell> {
    cells.iter().map(normalize_cell).collect()
}
