use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while answering a view query
#[derive(Error, Debug)]
pub enum ViewError {
    #[error(
        "processed data not found: {}: run `heatdash convert <input.xlsx> <out-dir>` first",
        .0.display()
    )]
    MissingData(PathBuf),

    #[error(transparent)]
    Table(#[from] heatdash_table::TableError),
}

impl ViewError {
    /// True for the absent-processed-output case the HTTP layer reports
    /// as not-found.
    #[must_use]
    pub fn is_missing_data(&self) -> bool {
        matches!(self, ViewError::MissingData(_))
    }
}

pub type Result<T> = std::result::Result<T, ViewError>;
