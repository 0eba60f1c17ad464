//! Year-keyed municipality data files.
//!
//! One CSV file per year under the data directory, e.g. `data/2026.csv`.
//! The column set is fixed and known ahead of time; header names are
//! assumed rather than validated.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// One row of the input file. Immutable once loaded.
#[derive(Debug, Clone, Deserialize)]
pub struct Municipality {
    pub municipal: String,
    /// Municipal tax rate in percent, e.g. `8.5`
    pub tax: Decimal,
    /// Church tax rate in percent
    pub churchtax: Decimal,
    pub child_deduction: Decimal,
    /// 1 if the municipality is connected to the center, 0 otherwise
    pub connected_to_center: u8,
    /// Distance-to-center score, 1 (close) to 5 (far)
    pub distance_to_center: u8,
    /// Living-cost classification, 1 (cheap) to 5 (expensive)
    pub cost_group: u8,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("no data file found for year {year} at {path}")]
    FileNotFound { year: i32, path: PathBuf },
    #[error("failed to read data file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed data file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Path of the data file for a year, by the fixed naming convention.
pub fn data_path(data_dir: &Path, year: i32) -> PathBuf {
    data_dir.join(format!("{year}.csv"))
}

/// Read municipality records, preserving input order.
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<Municipality>, csv::Error> {
    let mut rdr = csv::Reader::from_reader(reader);
    rdr.deserialize().collect()
}

/// Load the records for a year. The existence check runs before any parse
/// attempt so a missing year fails with `FileNotFound` rather than an
/// open error.
pub fn load_year(data_dir: &Path, year: i32) -> Result<Vec<Municipality>, LoadError> {
    let path = data_path(data_dir, year);
    if !path.exists() {
        return Err(LoadError::FileNotFound { year, path });
    }
    let file = File::open(&path).map_err(|source| LoadError::Io {
        path: path.clone(),
        source,
    })?;
    let records = read_csv(BufReader::new(file)).map_err(|source| LoadError::Parse {
        path: path.clone(),
        source,
    })?;
    log::info!("Read {} municipalities from {}", records.len(), path.display());
    Ok(records)
}
