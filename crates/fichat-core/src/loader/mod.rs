// crates/fichat-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the Physical Layer (I/O, Decompression) and delegates to
//! specific parsers (CSV, JSON, binary snapshot).

use crate::error::{FiError, Result};
use crate::FiTable;
use once_cell::sync::OnceCell;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

mod csv_source;
#[cfg(feature = "json")]
mod json_source;
mod snapshot;

static TABLE_CACHE: OnceCell<FiTable> = OnceCell::new();

/// On-disk layouts understood by [`FiTable::load_from_path`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Csv,
    Json,
    Snapshot,
}

impl SourceFormat {
    /// Detects the format from the extension, looking through a trailing `.gz`.
    pub fn from_path(path: &Path) -> Result<Self> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();
        let name = name.strip_suffix(".gz").unwrap_or(&name);

        if name.ends_with(".csv") {
            Ok(SourceFormat::Csv)
        } else if name.ends_with(".json") {
            Ok(SourceFormat::Json)
        } else if name.ends_with(".bin") {
            Ok(SourceFormat::Snapshot)
        } else {
            Err(FiError::InvalidData(format!(
                "unsupported dataset format: {}",
                path.display()
            )))
        }
    }
}

impl FiTable {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "fi_cities.csv"
    }

    /// Loads the bundled dataset. Parsed once per process, then cloned.
    pub fn load() -> Result<Self> {
        TABLE_CACHE
            .get_or_try_init(|| {
                let path = Self::default_data_dir().join(Self::default_dataset_filename());
                Self::load_from_path(path)
            })
            .cloned()
    }

    /// **Standard Loader:** reads a CSV, JSON or snapshot file, optionally gzipped.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = SourceFormat::from_path(path)?;
        let reader = open_stream(path)?;

        let table = match format {
            SourceFormat::Csv => Self::from_records(csv_source::read_records(reader)?)?,
            #[cfg(feature = "json")]
            SourceFormat::Json => Self::from_records(json_source::read_records(reader)?)?,
            #[cfg(not(feature = "json"))]
            SourceFormat::Json => {
                return Err(FiError::InvalidData(
                    "JSON source requested but 'json' disabled".into(),
                ))
            }
            SourceFormat::Snapshot => snapshot::read_snapshot(reader)?,
        };

        tracing::info!(
            path = %path.display(),
            ?format,
            rows = table.records().len(),
            cities = table.city_names().len(),
            provinces = table.province_names().len(),
            "reference table loaded"
        );
        Ok(table)
    }

    /// Reads a table from CSV text already in memory.
    pub fn from_csv_reader(reader: impl Read) -> Result<Self> {
        Self::from_records(csv_source::read_records(reader)?)
    }
}

fn is_gzip(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

/// Opens a file, buffers it, and wraps it in a Gzip decoder for `.gz` paths.
/// Returns a generic Reader so the caller doesn't care about the compression.
fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        FiError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    if !is_gzip(path) {
        return Ok(Box::new(reader));
    }

    #[cfg(feature = "compact")]
    {
        use flate2::read::GzDecoder;
        Ok(Box::new(GzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(FiError::InvalidData(
            "Gzip input but 'compact' disabled".into(),
        ))
    }
}
