//! Aggregation layer for heatdash.
//!
//! Groups canonical rows by a derived key, sums a derived numeric field
//! with an explicit fallback-to-zero coercion rule, and projects the
//! grouped totals into chart-ready series: an ascending time series or a
//! descending, size-bounded ranking.
//!
//! Aggregates are transient. Each call to [`group_sum`] builds one from
//! scratch over a read-only row slice, so concurrent callers with
//! different filters never share mutable state.
//!
//! # Examples
//!
//! ```
//! use heatdash_agg::{group_sum, Key};
//! use heatdash_table::{Scalar, Table};
//!
//! let mut table = Table::new(vec!["Year".to_string(), "TotalDiag".to_string()]);
//! table.push_values(vec![Scalar::Int(2019), Scalar::Int(100)]);
//! table.push_values(vec![Scalar::Int(2019), Scalar::Int(50)]);
//! table.push_values(vec![Scalar::Int(2020), Scalar::Int(80)]);
//!
//! let by_year = group_sum(
//!     table.rows(),
//!     |row| Key::from(&row["Year"]),
//!     |row| row["TotalDiag"].clone(),
//! );
//!
//! let series = by_year.project();
//! assert_eq!(series.keys, vec![Key::from(2019), Key::from(2020)]);
//! assert_eq!(series.totals, vec![150.0, 80.0]);
//! ```

mod group;
mod key;
mod series;

/// Re-export grouping primitives.
pub use group::{coerce_number, group_sum, GroupedAggregate};
/// Re-export the aggregation key.
pub use key::Key;
/// Re-export series shapes.
pub use series::{RankEntry, RankedSeries, TimeSeries};
