use crate::cell::RawCell;
use crate::error::Result;
use crate::grid::Grid;
use calamine::{open_workbook, Data, Reader, Xlsx};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Convert one calamine cell into the ingestion model.
fn raw_cell(data: &Data) -> RawCell {
    match data {
        Data::Empty => RawCell::Empty,
        Data::String(s) => RawCell::Text(s.clone()),
        Data::Float(f) => RawCell::Number(*f),
        Data::Int(i) => RawCell::Number(*i as f64),
        Data::Bool(b) => RawCell::Bool(*b),
        // Excel stores dates as serial numbers (days since 1899-12-30).
        Data::DateTime(dt) => RawCell::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => RawCell::Text(s.clone()),
        Data::Error(e) => RawCell::Error(format!("{e:?}")),
    }
}

/// Read every worksheet of an xlsx workbook into a raw grid.
///
/// The grid's declared column count is the worksheet's used-range width;
/// formulas arrive as their cached results.
pub fn read_workbook<P: AsRef<Path>>(path: P) -> Result<Vec<Grid>> {
    let mut workbook: Xlsx<BufReader<File>> = open_workbook(path.as_ref())?;

    let sheet_names = workbook.sheet_names().to_vec();
    let mut grids = Vec::with_capacity(sheet_names.len());

    for name in sheet_names {
        let range = workbook.worksheet_range(&name)?;
        let mut grid = Grid::new(&name, range.width());
        for row in range.rows() {
            grid.push_row(row.iter().map(raw_cell).collect());
        }
        grids.push(grid);
    }

    Ok(grids)
}

/// Derive a filesystem-safe file stem from a worksheet name: lowercased,
/// with runs of characters outside `[a-z0-9_-]` collapsed to a single
/// underscore and leading/trailing underscores trimmed.
#[must_use]
pub fn sanitize_sheet_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_was_sep = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
            out.push(c.to_ascii_lowercase());
            last_was_sep = false;
        } else if !last_was_sep {
            out.push('_');
            last_was_sep = true;
        }
    }
    out.trim_matches('_').to_string()
}
