// crates/fichat-core/src/stats.rs

//! Lookups and aggregations over the reference table.

use crate::answer::{CityCount, CityRow, ProvinceSummary, StatisticAnswer};
use crate::error::{FiError, Result};
use crate::model::FiRecord;
use crate::text::{fold_key, words};
use crate::FiTable;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatisticKind {
    Mean,
    Max,
    Min,
}

/// Keyword table, in precedence order. A bare "statistics" asks for the
/// average, but only when no more specific keyword is present.
const STATISTIC_KEYWORDS: [(StatisticKind, &[&str]); 4] = [
    (StatisticKind::Mean, &["mean", "average"]),
    (StatisticKind::Max, &["max", "highest", "most"]),
    (StatisticKind::Min, &["min", "lowest", "fewest"]),
    (StatisticKind::Mean, &["statistics", "statistic"]),
];

impl StatisticKind {
    /// Detects a statistic keyword as a whole word in `text`.
    ///
    /// With several keywords present the precedence is mean, then max, then min.
    pub fn detect(text: &str) -> Option<Self> {
        let folded = fold_key(text);
        let found: Vec<&str> = words(&folded).collect();
        STATISTIC_KEYWORDS
            .iter()
            .find(|(_, keys)| keys.iter().any(|k| found.contains(k)))
            .map(|(kind, _)| *kind)
    }

    pub fn keywords(self) -> Vec<&'static str> {
        STATISTIC_KEYWORDS
            .iter()
            .filter(|(kind, _)| *kind == self)
            .flat_map(|(_, keys)| keys.iter().copied())
            .collect()
    }
}

/// First row with the largest count; later equal counts do not replace it.
fn first_max<'a>(rows: impl IntoIterator<Item = &'a FiRecord>) -> Option<&'a FiRecord> {
    rows.into_iter().fold(None, |best: Option<&FiRecord>, r| match best {
        Some(b) if r.fi_count <= b.fi_count => Some(b),
        _ => Some(r),
    })
}

/// First row with the smallest count.
fn first_min<'a>(rows: impl IntoIterator<Item = &'a FiRecord>) -> Option<&'a FiRecord> {
    rows.into_iter().fold(None, |best: Option<&FiRecord>, r| match best {
        Some(b) if r.fi_count >= b.fi_count => Some(b),
        _ => Some(r),
    })
}

impl From<&FiRecord> for CityRow {
    fn from(r: &FiRecord) -> Self {
        CityRow {
            city: r.city.clone(),
            province: r.province.clone(),
            fi_count: r.fi_count,
        }
    }
}

impl From<&FiRecord> for CityCount {
    fn from(r: &FiRecord) -> Self {
        CityCount {
            city: r.city.clone(),
            fi_count: r.fi_count,
        }
    }
}

impl FiTable {
    /// Every row for the folded city key.
    pub fn city_rows(&self, city: &str) -> Vec<CityRow> {
        self.rows_for_city(city).map(CityRow::from).collect()
    }

    /// Cities, total, highest and lowest for the folded province key.
    ///
    /// Ties for highest/lowest go to the earliest row in table order.
    pub fn province_summary(&self, province: &str) -> Result<ProvinceSummary> {
        let rows: Vec<&FiRecord> = self.rows_for_province(province).collect();
        let (Some(highest), Some(lowest)) = (
            first_max(rows.iter().copied()),
            first_min(rows.iter().copied()),
        ) else {
            return Err(FiError::NotFound(format!(
                "province '{province}' has no rows"
            )));
        };

        Ok(ProvinceSummary {
            province: province.to_owned(),
            total_fis: rows.iter().map(|r| u64::from(r.fi_count)).sum(),
            cities: rows.iter().copied().map(CityCount::from).collect(),
            highest: highest.into(),
            lowest: lowest.into(),
        })
    }

    /// Whole-table statistic over the FI count column.
    pub fn statistic(&self, kind: StatisticKind) -> Result<StatisticAnswer> {
        if self.is_empty() {
            return Err(FiError::InvalidData(
                "cannot compute statistics over an empty table".into(),
            ));
        }

        let answer = match kind {
            StatisticKind::Mean => {
                let total: u64 = self.records().iter().map(|r| u64::from(r.fi_count)).sum();
                let mean = total as f64 / self.records().len() as f64;
                StatisticAnswer {
                    statistic: kind,
                    value: mean,
                    city: None,
                    message: format!(
                        "The average number of financial institutions per city is {mean:.2}"
                    ),
                }
            }
            StatisticKind::Max | StatisticKind::Min => {
                let (row, word) = if kind == StatisticKind::Max {
                    (first_max(self.records()), "highest")
                } else {
                    (first_min(self.records()), "lowest")
                };
                let row = row.ok_or_else(|| FiError::InvalidData("no rows".into()))?;
                StatisticAnswer {
                    statistic: kind,
                    value: f64::from(row.fi_count),
                    city: Some(row.into()),
                    message: format!(
                        "The city with the {word} number of financial institutions is {} ({}) with {}.",
                        row.city, row.province, row.fi_count
                    ),
                }
            }
        };
        Ok(answer)
    }
}
