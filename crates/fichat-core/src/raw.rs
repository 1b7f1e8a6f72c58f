// crates/fichat-core/src/raw.rs
use serde::{Deserialize, Serialize};

/// Raw row structure as it comes from the source dataset.
///
/// Column names follow the published CSV:
/// `Cities,Province,Total Number of Fis`
/// NOTE: This type mirrors the external dataset. Names are not normalized yet.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FiRecordRaw {
    #[serde(rename = "Cities", alias = "city")]
    pub city: String,
    #[serde(rename = "Province", alias = "province")]
    pub province: String,
    #[serde(rename = "Total Number of Fis", alias = "fi_count")]
    pub fi_count: u32,
}

impl FiRecordRaw {
    pub fn new(city: &str, province: &str, fi_count: u32) -> Self {
        Self {
            city: city.to_owned(),
            province: province.to_owned(),
            fi_count,
        }
    }
}
