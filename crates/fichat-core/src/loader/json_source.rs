// crates/fichat-core/src/loader/json_source.rs

// ---------------------------------------------------------------------------
// FILE GUARD: only compiled with the 'json' feature (see loader/mod.rs).
// ---------------------------------------------------------------------------

use crate::error::{FiError, Result};
use crate::raw::FiRecordRaw;
use std::io::Read;

/// Parses a JSON array of rows, either with the CSV column names
/// (`"Cities"`, `"Province"`, `"Total Number of Fis"`) or with
/// `city`/`province`/`fi_count`.
pub(super) fn read_records(reader: impl Read) -> Result<Vec<FiRecordRaw>> {
    serde_json::from_reader(reader).map_err(FiError::Json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_both_key_styles() {
        let data = r#"[
            {"Cities": "Manila", "Province": "Metro Manila", "Total Number of Fis": 95},
            {"city": "Davao City", "province": "Davao del Sur", "fi_count": 60}
        ]"#;
        let rows = read_records(data.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].province, "Davao del Sur");
    }

    #[test]
    fn rejects_negative_counts() {
        let data = r#"[{"city": "X", "province": "Y", "fi_count": -1}]"#;
        assert!(read_records(data.as_bytes()).is_err());
    }
}
