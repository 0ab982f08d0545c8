use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::{Dataset, Record};

/// Column holding the year of each observation.
pub const PERIOD_COLUMN: &str = "TIME_PERIOD";
/// Column holding the country name.
pub const AREA_COLUMN: &str = "REF_AREA_LABEL";
/// Column holding the measured percentage.
pub const VALUE_COLUMN: &str = "OBS_VALUE";

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Everything that can go wrong before the animation starts.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("data file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to open {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("data file is empty")]
    Empty,

    #[error("data file has a header but no rows")]
    NoRecords,

    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("row {row}: {source}")]
    Csv {
        row: usize,
        #[source]
        source: csv::Error,
    },

    #[error("row {row}: column '{column}' has invalid value '{value}'")]
    InvalidField {
        row: usize,
        column: &'static str,
        value: String,
    },
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the dataset from a comma-separated file on disk.
pub fn load_file(path: &Path) -> Result<Dataset, LoadError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;
    read_dataset(file)
}

/// Parse CSV from any reader.
///
/// The header row must name `TIME_PERIOD`, `REF_AREA_LABEL` and `OBS_VALUE`
/// (in any order); other columns are ignored. Values must be finite and
/// non-negative.
pub fn read_dataset<R: Read>(source: R) -> Result<Dataset, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(source);

    let headers = reader
        .headers()
        .map_err(|e| LoadError::Csv { row: 0, source: e })?
        .clone();
    if headers.is_empty() || headers.iter().all(str::is_empty) {
        return Err(LoadError::Empty);
    }

    let column = |name: &'static str| {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or(LoadError::MissingColumn(name))
    };
    let period_idx = column(PERIOD_COLUMN)?;
    let area_idx = column(AREA_COLUMN)?;
    let value_idx = column(VALUE_COLUMN)?;

    let mut records = Vec::new();

    // Data rows are numbered from 1; the header is row 0.
    for (i, result) in reader.records().enumerate() {
        let row = i + 1;
        let rec = result.map_err(|e| LoadError::Csv { row, source: e })?;
        let field = |idx: usize| rec.get(idx).unwrap_or("");

        let period = parse_period(field(period_idx)).ok_or_else(|| LoadError::InvalidField {
            row,
            column: PERIOD_COLUMN,
            value: field(period_idx).to_string(),
        })?;

        let area_label = field(area_idx);
        if area_label.is_empty() {
            return Err(LoadError::InvalidField {
                row,
                column: AREA_COLUMN,
                value: String::new(),
            });
        }

        let value = parse_value(field(value_idx)).ok_or_else(|| LoadError::InvalidField {
            row,
            column: VALUE_COLUMN,
            value: field(value_idx).to_string(),
        })?;

        records.push(Record::new(period, area_label, value));
    }

    if records.is_empty() {
        return Err(LoadError::NoRecords);
    }

    Ok(Dataset::from_records(records))
}

// ---------------------------------------------------------------------------
// Field parsers
// ---------------------------------------------------------------------------

/// Years may be written as integers or as whole floats (`2010.0`).
fn parse_period(s: &str) -> Option<i32> {
    if let Ok(y) = s.parse::<i32>() {
        return Some(y);
    }
    let f = s.parse::<f64>().ok()?;
    if f.is_finite() && f.fract() == 0.0 && f >= i32::MIN as f64 && f <= i32::MAX as f64 {
        Some(f as i32)
    } else {
        None
    }
}

fn parse_value(s: &str) -> Option<f64> {
    s.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}
