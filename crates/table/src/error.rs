use thiserror::Error;

/// Errors that can occur while reading or writing tables
#[derive(Error, Debug)]
pub enum TableError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Workbook error: {0}")]
    Workbook(#[from] calamine::XlsxError),
}

pub type Result<T> = std::result::Result<T, TableError>;
