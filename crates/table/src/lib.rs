//! Canonical table model for heatdash.
//!
//! Normalizes heterogeneous spreadsheet cells into column-keyed rows of
//! scalar values and persists them as CSV. The pipeline is a pure
//! transformation chain: raw worksheet cells resolve to scalars, a header
//! row derives stable column keys, and the resulting table round-trips
//! through delimited text under numeric coercion.
//!
//! # Examples
//!
//! ## Extracting a table from a raw grid
//!
//! ```
//! use heatdash_table::{Grid, RawCell, Scalar, Table};
//!
//! let grid = Grid::from_rows(
//!     "cases",
//!     2,
//!     vec![
//!         vec![RawCell::Text("Year".into()), RawCell::Text("TotalDiag".into())],
//!         vec![RawCell::Number(2019.0), RawCell::Number(100.0)],
//!     ],
//! );
//!
//! let table = Table::extract(&grid);
//! assert_eq!(table.columns(), ["Year", "TotalDiag"]);
//! assert_eq!(table.rows()[0]["TotalDiag"], Scalar::Float(100.0));
//! ```
//!
//! ## CSV round-trip
//!
//! ```
//! use heatdash_table::{Scalar, Table};
//!
//! let mut table = Table::new(vec!["Year".to_string(), "Deaths".to_string()]);
//! table.push_values(vec![Scalar::Int(2019), Scalar::Int(4)]);
//!
//! let restored = Table::from_csv_str(&table.to_csv_string()).unwrap().table;
//! assert_eq!(restored.rows()[0]["Deaths"], Scalar::Int(4));
//! ```

mod cell;
mod csv;
mod error;
mod grid;
mod table;
mod xlsx;

/// Re-export cell types.
pub use cell::{RawCell, Scalar};
/// Re-export CSV import types.
pub use csv::{CsvImport, CsvWarning};
/// Re-export error types.
pub use error::{Result, TableError};
/// Re-export the raw grid.
pub use grid::Grid;
/// Re-export table types.
pub use table::{Row, Table};
/// Re-export workbook ingestion.
pub use xlsx::{read_workbook, sanitize_sheet_name};
