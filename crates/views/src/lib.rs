//! Chart view queries for heatdash.
//!
//! The query boundary between the processed tables and the charting front
//! end: given the cases and deaths tables, produce the diagnoses-by-year
//! trend, the top-conditions ranking and the year-aligned deaths
//! comparison. Filtering by ICD version is a pure predicate applied before
//! grouping; the aggregate is rebuilt on every call.

mod error;
mod store;

/// Re-export view error types.
pub use error::{Result, ViewError};
/// Re-export the processed-data store.
pub use store::{DataStore, CASES_FILE, DEATHS_FILE};

use heatdash_agg::{group_sum, Key, RankedSeries, TimeSeries};
use heatdash_table::{Row, Scalar, Table};
use serde::Serialize;

/// Year column, present in both tables.
pub const YEAR: &str = "Year";
/// ICD revision column of the cases table.
pub const ICD_VERSION: &str = "ICD_Version";
/// Diagnosed condition column of the cases table.
pub const BASE_CONDITION: &str = "BaseCondition";
/// Diagnosis count column of the cases table.
pub const TOTAL_DIAG: &str = "TotalDiag";
/// Total heat diagnoses column of the deaths table.
pub const TOTAL_HEAT_DIAG: &str = "TotalHeatDiag";
/// Deaths column of the deaths table.
pub const DEATHS: &str = "Deaths";

/// Sentinel ICD selection meaning "no filter".
pub const ALL_VERSIONS: &str = "ALL";

static NULL: Scalar = Scalar::Null;

fn field<'a>(row: &'a Row, name: &str) -> &'a Scalar {
    row.get(name).unwrap_or(&NULL)
}

/// The ICD-version predicate. The select-all sentinel is just a selection
/// every row matches, not a separate code path.
fn matches_version(row: &Row, selection: &str) -> bool {
    selection == ALL_VERSIONS || field(row, ICD_VERSION).to_string() == selection
}

/// Total diagnoses by year over the ICD-filtered cases rows.
#[must_use]
pub fn cases_trend(cases: &Table, selection: &str) -> TimeSeries {
    group_sum(
        cases.rows().iter().filter(|row| matches_version(row, selection)),
        |row| Key::from(field(row, YEAR)),
        |row| field(row, TOTAL_DIAG).clone(),
    )
    .project()
}

/// Top diagnosed conditions by total diagnoses over the ICD-filtered cases
/// rows, descending, truncated to `n`.
#[must_use]
pub fn top_conditions(cases: &Table, selection: &str, n: usize) -> RankedSeries {
    group_sum(
        cases.rows().iter().filter(|row| matches_version(row, selection)),
        |row| Key::from(field(row, BASE_CONDITION)),
        |row| field(row, TOTAL_DIAG).clone(),
    )
    .rank(n)
}

/// The year-aligned comparison view: total heat diagnoses and deaths.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeathsTrend {
    pub diagnoses: TimeSeries,
    pub deaths: TimeSeries,
}

/// Total heat diagnoses and deaths by year from the deaths table.
#[must_use]
pub fn deaths_trend(deaths: &Table) -> DeathsTrend {
    let diagnoses = group_sum(
        deaths.rows(),
        |row| Key::from(field(row, YEAR)),
        |row| field(row, TOTAL_HEAT_DIAG).clone(),
    )
    .project();
    let totals = group_sum(
        deaths.rows(),
        |row| Key::from(field(row, YEAR)),
        |row| field(row, DEATHS).clone(),
    )
    .project();
    DeathsTrend {
        diagnoses,
        deaths: totals,
    }
}

/// Distinct non-blank ICD versions of the cases table, sorted, for the
/// front end's filter control.
#[must_use]
pub fn icd_versions(cases: &Table) -> Vec<String> {
    let mut versions: Vec<String> = cases
        .rows()
        .iter()
        .map(|row| field(row, ICD_VERSION).to_string())
        .filter(|v| !v.trim().is_empty())
        .collect();
    versions.sort();
    versions.dedup();
    versions
}
