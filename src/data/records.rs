//! Census record type and CSV loading.
//!
//! The dataset arrives as a delimited text file whose numeric columns are
//! strings. Loading coerces the columns the chart uses (`poverty`, `age`,
//! `healthcare`) to `f64`; values that fail to parse become NaN and flow
//! through unchanged. Columns the chart does not use (income, obesity,
//! margins of error, ...) are ignored.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// One row of the census dataset. Immutable once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct CensusRecord {
    /// Full state name, e.g. "Alabama".
    pub state: String,
    /// Two-letter abbreviation drawn inside the mark, e.g. "AL".
    pub abbr: String,
    pub poverty: f64,
    pub age: f64,
    pub healthcare: f64,
}

/// Raw CSV row as it appears on disk: every cell is text.
#[derive(Debug, Deserialize)]
struct RawRecord {
    state: String,
    abbr: String,
    #[serde(default)]
    poverty: String,
    #[serde(default)]
    age: String,
    #[serde(default)]
    healthcare: String,
}

impl From<RawRecord> for CensusRecord {
    fn from(raw: RawRecord) -> Self {
        CensusRecord {
            state: raw.state,
            abbr: raw.abbr,
            poverty: coerce(&raw.poverty),
            age: coerce(&raw.age),
            healthcare: coerce(&raw.healthcare),
        }
    }
}

/// Coerce a textual cell to a number. Anything unparseable becomes NaN,
/// which later poisons the scale domain instead of raising an error.
fn coerce(cell: &str) -> f64 {
    cell.trim().parse().unwrap_or(f64::NAN)
}

/// Load the census dataset from a CSV file on disk.
///
/// One-shot: there is no caching and no retry. Errors cover I/O and CSV
/// structure only; cell contents are never validated (see [`coerce`]).
pub fn load_census_csv<P: AsRef<Path>>(path: P) -> Result<Vec<CensusRecord>> {
    let path = path.as_ref();
    let reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open census data at {}", path.display()))?;
    read_records(reader).with_context(|| format!("failed to read census data at {}", path.display()))
}

/// Load the census dataset from any reader (used by tests and embedded data).
pub fn load_census_reader<R: Read>(reader: R) -> Result<Vec<CensusRecord>> {
    read_records(csv::Reader::from_reader(reader))
}

fn read_records<R: Read>(mut reader: csv::Reader<R>) -> Result<Vec<CensusRecord>> {
    let mut records = Vec::new();
    for row in reader.deserialize::<RawRecord>() {
        let raw = row.context("malformed CSV row")?;
        records.push(raw.into());
    }
    Ok(records)
}
