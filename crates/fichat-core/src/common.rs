use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for the reference table.
///
/// Returned by [`crate::FiTable::stats`], these counts reflect the normalized
/// in-memory table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableStats {
    pub rows: usize,
    pub cities: usize,
    pub provinces: usize,
    pub total_fis: u64,
}
