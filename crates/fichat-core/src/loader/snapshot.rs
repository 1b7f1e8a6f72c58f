// crates/fichat-core/src/loader/snapshot.rs

//! Binary snapshots of an already-normalized table (bincode).

use crate::error::{FiError, Result};
use crate::FiTable;
use bincode::Options;
use std::io::Read;

/// Upper bound for a snapshot payload.
const SNAPSHOT_LIMIT: u64 = 64 * 1024 * 1024;

pub(super) fn read_snapshot(mut reader: impl Read) -> Result<FiTable> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data).map_err(FiError::Io)?;
    FiTable::from_bytes(&data)
}

impl FiTable {
    /// Reconstructs a table from the bytes written by [`FiTable::save_as`]
    /// (after decompression).
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        // save_as writes with the fixint default of bincode::serialize
        let table: FiTable = bincode::DefaultOptions::new()
            .with_fixint_encoding()
            .with_limit(SNAPSHOT_LIMIT)
            .allow_trailing_bytes()
            .deserialize(data)?;
        Ok(table)
    }

    /// Writes a snapshot, gzip-compressed when the path ends in `.gz`.
    #[cfg(feature = "builder")]
    pub fn save_as(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        use std::fs::File;
        use std::io::{BufWriter, Write};

        let path = path.as_ref();
        let file = File::create(path).map_err(FiError::Io)?;
        let mut writer = BufWriter::new(file);

        if super::is_gzip(path) {
            #[cfg(feature = "compact")]
            {
                use flate2::{write::GzEncoder, Compression};
                let mut encoder = GzEncoder::new(writer, Compression::default());
                bincode::serialize_into(&mut encoder, self).map_err(FiError::Bincode)?;
                // finish() writes the gzip trailer and reports its errors
                writer = encoder.finish().map_err(FiError::Io)?;
            }
            #[cfg(not(feature = "compact"))]
            {
                return Err(FiError::InvalidData(
                    "Gzip requested but 'compact' disabled".into(),
                ));
            }
        } else {
            bincode::serialize_into(&mut writer, self).map_err(FiError::Bincode)?;
        }

        writer.flush().map_err(FiError::Io)?;
        tracing::info!(path = %path.display(), rows = self.records().len(), "snapshot written");
        Ok(())
    }
}
