use crate::cell::Scalar;
use crate::error::Result;
use crate::table::Table;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// A recoverable diagnostic from CSV deserialization.
///
/// Raised when a data record's field count differs from the header's; the
/// record is still imported by best-effort positional assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvWarning {
    /// 1-based data record index (the header is not counted).
    pub record: u64,
    /// Field count declared by the header.
    pub expected: usize,
    /// Field count actually found on the record.
    pub found: usize,
}

impl fmt::Display for CsvWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "record {}: expected {} fields, found {}",
            self.record, self.expected, self.found
        )
    }
}

/// The outcome of a CSV import: the table plus any non-fatal diagnostics.
#[derive(Debug, Clone)]
pub struct CsvImport {
    pub table: Table,
    pub warnings: Vec<CsvWarning>,
}

impl Table {
    /// Write the table as CSV: one header line from the column keys, then
    /// one line per row in column order. Null becomes an empty field;
    /// quoting follows standard CSV escaping.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::WriterBuilder::new().from_writer(writer);

        csv_writer.write_record(self.columns())?;
        for row in self.rows() {
            let record: Vec<String> = self
                .columns()
                .iter()
                .map(|key| row.get(key).map_or_else(String::new, ToString::to_string))
                .collect();
            csv_writer.write_record(&record)?;
        }

        csv_writer.flush()?;
        Ok(())
    }

    /// Save the table to a CSV file
    pub fn save_csv<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        self.write_csv(BufWriter::new(file))
    }

    /// Convert the table to a CSV string
    #[must_use]
    pub fn to_csv_string(&self) -> String {
        let mut buffer = Vec::new();
        // Writing to a Vec cannot fail
        let _ = self.write_csv(&mut buffer);
        String::from_utf8_lossy(&buffer).to_string()
    }

    /// Load a table from a CSV file
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<CsvImport> {
        let file = File::open(path)?;
        Self::from_csv_reader(BufReader::new(file))
    }

    /// Load a table from a CSV string
    pub fn from_csv_str(content: &str) -> Result<CsvImport> {
        Self::from_csv_reader(content.as_bytes())
    }

    /// Load a table from a reader.
    ///
    /// The first record supplies the column keys. Every field of the data
    /// records goes through [`Scalar::parse`], so integer and decimal
    /// literals come back as numbers and empty fields as `Null`. Records
    /// whose field count differs from the header are assigned positionally
    /// (short records padded with `Null`, extra fields dropped) and reported
    /// as warnings rather than failing the import.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<CsvImport> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut columns: Vec<String> = Vec::new();
        let mut table = Table::default();
        let mut warnings = Vec::new();

        for (index, result) in csv_reader.records().enumerate() {
            let record = result?;
            if index == 0 {
                columns = record.iter().map(ToString::to_string).collect();
                table = Table::new(columns.clone());
                continue;
            }

            if record.len() != columns.len() {
                warnings.push(CsvWarning {
                    record: index as u64,
                    expected: columns.len(),
                    found: record.len(),
                });
            }

            let values: Vec<Scalar> = (0..columns.len())
                .map(|col| record.get(col).map_or(Scalar::Null, Scalar::parse))
                .collect();
            table.push_values(values);
        }

        Ok(CsvImport { table, warnings })
    }
}
