use crate::cell::Scalar;
use crate::grid::Grid;
use indexmap::IndexMap;

/// A canonical row: column key to resolved scalar, in header order.
pub type Row = IndexMap<String, Scalar>;

/// An ordered sequence of canonical rows sharing one column-key set.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    /// Create an empty table with the given column keys.
    #[must_use]
    pub fn new(columns: Vec<String>) -> Self {
        Table {
            columns,
            rows: Vec::new(),
        }
    }

    /// Get the column keys in derived order
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Get the rows
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Get the number of rows
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append a row from positional values: zipped with the column keys,
    /// padded with `Null` when short, extra trailing values dropped.
    pub fn push_values(&mut self, values: Vec<Scalar>) {
        let mut iter = values.into_iter();
        let row: Row = self
            .columns
            .iter()
            .map(|key| (key.clone(), iter.next().unwrap_or(Scalar::Null)))
            .collect();
        self.rows.push(row);
    }

    /// Extract a canonical table from a raw grid.
    ///
    /// The header is derived from row 0: each cell resolved, stringified and
    /// trimmed, with `col_<1-based index>` synthesized where that leaves an
    /// empty key. Every data row resolves the full declared column count so
    /// all kept rows carry the header's key set; rows whose every value is
    /// blank never enter the table.
    #[must_use]
    pub fn extract(grid: &Grid) -> Table {
        let columns: Vec<String> = (0..grid.column_count())
            .map(|col| {
                let header = grid.cell(0, col).resolve().to_string();
                let header = header.trim();
                if header.is_empty() {
                    format!("col_{}", col + 1)
                } else {
                    header.to_string()
                }
            })
            .collect();

        let mut table = Table::new(columns);
        for row in 1..grid.row_count() {
            let values: Vec<Scalar> = (0..grid.column_count())
                .map(|col| grid.cell(row, col).resolve())
                .collect();
            if values.iter().all(Scalar::is_blank) {
                continue;
            }
            table.push_values(values);
        }
        table
    }
}
