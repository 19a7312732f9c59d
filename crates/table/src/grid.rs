use crate::cell::RawCell;

static EMPTY_CELL: RawCell = RawCell::Empty;

/// A named, bounded grid of raw cells with a declared column count.
///
/// The declared column count, not any row's own length, is what row
/// extraction iterates over; reads outside the stored cells yield `Empty`.
#[derive(Debug, Clone)]
pub struct Grid {
    name: String,
    columns: usize,
    rows: Vec<Vec<RawCell>>,
}

impl Grid {
    /// Create an empty grid with a declared column count.
    #[must_use]
    pub fn new(name: &str, columns: usize) -> Self {
        Grid {
            name: name.to_string(),
            columns,
            rows: Vec::new(),
        }
    }

    /// Create a grid from pre-built rows.
    #[must_use]
    pub fn from_rows(name: &str, columns: usize, rows: Vec<Vec<RawCell>>) -> Self {
        Grid {
            name: name.to_string(),
            columns,
            rows,
        }
    }

    /// Append one row of cells. Rows may be shorter than the declared
    /// column count; the missing trailing cells read back as `Empty`.
    pub fn push_row(&mut self, row: Vec<RawCell>) {
        self.rows.push(row);
    }

    /// Get the worksheet name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the declared column count
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns
    }

    /// Get the number of stored rows, header included
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the cell at (row, col), `Empty` outside the stored cells.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> &RawCell {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&EMPTY_CELL)
    }
}
