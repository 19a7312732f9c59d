use crate::error::{Result, ViewError};
use heatdash_table::Table;
use std::path::{Path, PathBuf};

/// Processed CSV written from the "Heat Related Cases" worksheet.
pub const CASES_FILE: &str = "heat_related_cases.csv";
/// Processed CSV written from the "Heat Deaths" worksheet.
pub const DEATHS_FILE: &str = "heat_deaths.csv";

/// Read access to the processed CSV directory.
///
/// Tables are reloaded on every call; the store keeps no cached state, so
/// a fresh conversion run is picked up by the next query.
#[derive(Debug, Clone)]
pub struct DataStore {
    dir: PathBuf,
}

impl DataStore {
    /// Create a store over a processing output directory.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        DataStore { dir: dir.into() }
    }

    /// Get the directory this store reads from
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Load the cases table
    pub fn load_cases(&self) -> Result<Table> {
        self.load(CASES_FILE)
    }

    /// Load the deaths table
    pub fn load_deaths(&self) -> Result<Table> {
        self.load(DEATHS_FILE)
    }

    fn load(&self, file: &str) -> Result<Table> {
        let path = self.dir.join(file);
        if !path.exists() {
            return Err(ViewError::MissingData(path));
        }

        let import = Table::from_csv_path(&path)?;
        for warning in &import.warnings {
            tracing::warn!(file = %path.display(), %warning, "CSV parse warning");
        }
        Ok(import.table)
    }
}
