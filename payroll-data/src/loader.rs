use std::io::Read;
use std::path::Path;

use payroll_core::BracketRow;
use payroll_core::schedule::{BracketTable, ScheduleError};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when loading bracket table data.
#[derive(Debug, Error)]
pub enum BracketTableLoaderError {
    #[error("CSV parse error on row {row}: {message}")]
    CsvParse { row: usize, message: String },

    #[error("cannot read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid bracket table: {0}")]
    Invalid(#[from] ScheduleError),
}

/// A single record from a bracket table CSV file.
///
/// - `lower_bound`: lowest monthly income of the bracket
/// - `base_amount`: fixed tax owed at the lower bound
/// - `marginal_rate`: rate on the excess over the lower bound (e.g. 0.1088)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BracketRecord {
    pub lower_bound: Decimal,
    pub base_amount: Decimal,
    pub marginal_rate: Decimal,
}

impl From<&BracketRecord> for BracketRow {
    fn from(record: &BracketRecord) -> Self {
        BracketRow::new(record.lower_bound, record.base_amount, record.marginal_rate)
    }
}

/// Loader for monthly income-tax bracket tables stored as CSV.
///
/// Rows must appear in ascending order of `lower_bound`; the loader does not
/// sort them, so a misordered file is reported rather than silently fixed.
pub struct BracketTableLoader;

impl BracketTableLoader {
    /// Parse bracket records from a CSV reader.
    ///
    /// Headers are matched by name and surrounding whitespace is trimmed.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<BracketRecord>, BracketTableLoaderError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .flexible(false)
            .from_reader(reader);

        csv_reader
            .deserialize::<BracketRecord>()
            .enumerate()
            .map(|(idx, result)| {
                result.map_err(|e| BracketTableLoaderError::CsvParse {
                    row: idx + 1,
                    message: e.to_string(),
                })
            })
            .collect()
    }

    /// Parse and validate a CSV reader into a [`BracketTable`].
    pub fn load<R: Read>(reader: R) -> Result<BracketTable, BracketTableLoaderError> {
        let records = Self::parse(reader)?;
        debug!(rows = records.len(), "parsed bracket records");

        let rows = records.iter().map(BracketRow::from).collect();
        Ok(BracketTable::new(rows)?)
    }

    /// Convenience wrapper: open a file from disk and delegate to [`Self::load`].
    pub fn load_from_file(path: &Path) -> Result<BracketTable, BracketTableLoaderError> {
        let file = std::fs::File::open(path).map_err(|source| BracketTableLoaderError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::load(file)
    }
}
