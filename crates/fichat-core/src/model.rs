// crates/fichat-core/src/model.rs
use crate::common::TableStats;
use crate::error::{FiError, Result};
use crate::raw::FiRecordRaw;
use crate::text::fold_key;
use serde::{Deserialize, Serialize};

/// One row of the reference table. Names are folded (see [`fold_key`]).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiRecord {
    pub city: String,
    pub province: String,
    pub fi_count: u32,
}

/// The immutable reference table plus its derived name lists.
///
/// `cities` and `provinces` hold the distinct folded names in order of first
/// appearance; they are the candidate pools for fuzzy matching.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FiTable {
    records: Vec<FiRecord>,
    cities: Vec<String>,
    provinces: Vec<String>,
}

impl FiTable {
    /// Builds the table from raw rows, applying the one-time normalization pass.
    ///
    /// Rows whose city or province is blank after trimming are rejected. The
    /// same city name may appear under several provinces; the name list keeps
    /// it once.
    pub fn from_records(raw: Vec<FiRecordRaw>) -> Result<Self> {
        let mut records = Vec::with_capacity(raw.len());
        let mut cities: Vec<String> = Vec::new();
        let mut provinces: Vec<String> = Vec::new();

        for (line, row) in raw.into_iter().enumerate() {
            let city = fold_key(&row.city);
            let province = fold_key(&row.province);
            if city.is_empty() || province.is_empty() {
                return Err(FiError::InvalidData(format!(
                    "row {}: city and province must not be empty",
                    line + 1
                )));
            }

            if !cities.contains(&city) {
                cities.push(city.clone());
            }
            if !provinces.contains(&province) {
                provinces.push(province.clone());
            }
            records.push(FiRecord {
                city,
                province,
                fi_count: row.fi_count,
            });
        }

        Ok(Self {
            records,
            cities,
            provinces,
        })
    }

    pub fn records(&self) -> &[FiRecord] {
        &self.records
    }

    /// Distinct folded city names, table order.
    pub fn city_names(&self) -> &[String] {
        &self.cities
    }

    /// Distinct folded province names, table order.
    pub fn province_names(&self) -> &[String] {
        &self.provinces
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn stats(&self) -> TableStats {
        TableStats {
            rows: self.records.len(),
            cities: self.cities.len(),
            provinces: self.provinces.len(),
            total_fis: self.records.iter().map(|r| u64::from(r.fi_count)).sum(),
        }
    }

    /// All rows whose city equals the folded `city` key.
    pub fn rows_for_city<'a>(&'a self, city: &'a str) -> impl Iterator<Item = &'a FiRecord> + 'a {
        self.records.iter().filter(move |r| r.city == city)
    }

    /// All rows whose province equals the folded `province` key, table order.
    pub fn rows_for_province<'a>(
        &'a self,
        province: &'a str,
    ) -> impl Iterator<Item = &'a FiRecord> + 'a {
        self.records.iter().filter(move |r| r.province == province)
    }
}
