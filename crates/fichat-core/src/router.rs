// crates/fichat-core/src/router.rs

//! Single-turn query routing.
//!
//! Classification order: exit keyword, statistic keyword, city match,
//! province match. The first hit decides the intent, except that a province
//! match covering more of the query than the city match wins.

use crate::answer::Answer;
use crate::error::Result;
use crate::resolve::{EntityKind, MatchPolicy};
use crate::similarity::Scorer;
use crate::stats::StatisticKind;
use crate::text::{contains_word, fold_key};
use crate::FiTable;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub const DEFAULT_CITY_POLICY: MatchPolicy = MatchPolicy::new(Scorer::Ratio, 80);
pub const DEFAULT_PROVINCE_POLICY: MatchPolicy = MatchPolicy::new(Scorer::Ratio, 90);
pub const DEFAULT_EXIT_KEYWORD: &str = "exit";

/// Matching knobs for the router.
///
/// Can be read from JSON; missing fields fall back to the defaults:
///
/// ```json
/// { "city": { "scorer": "ratio", "threshold": 80 },
///   "province": { "scorer": "ratio", "threshold": 90 },
///   "exit_keyword": "exit" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    pub city: MatchPolicy,
    pub province: MatchPolicy,
    pub exit_keyword: String,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            city: DEFAULT_CITY_POLICY,
            province: DEFAULT_PROVINCE_POLICY,
            exit_keyword: DEFAULT_EXIT_KEYWORD.to_owned(),
        }
    }
}

impl RouterConfig {
    pub fn policy(&self, kind: EntityKind) -> MatchPolicy {
        match kind {
            EntityKind::City => self.city,
            EntityKind::Province => self.province,
        }
    }
}

/// The classified purpose of a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Exit,
    Statistic(StatisticKind),
    City(String),
    Province(String),
    Unrecognized,
}

/// Routes free text to a lookup over a shared, read-only table.
///
/// Cloning is cheap; clones share the table.
#[derive(Debug, Clone)]
pub struct Router {
    table: Arc<FiTable>,
    config: RouterConfig,
}

impl Router {
    pub fn new(table: Arc<FiTable>, config: RouterConfig) -> Self {
        Self { table, config }
    }

    pub fn with_defaults(table: Arc<FiTable>) -> Self {
        Self::new(table, RouterConfig::default())
    }

    pub fn table(&self) -> &FiTable {
        &self.table
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    pub fn is_exit(&self, text: &str) -> bool {
        contains_word(text, &self.config.exit_keyword)
    }

    pub fn classify(&self, text: &str) -> Intent {
        if self.is_exit(text) {
            return Intent::Exit;
        }
        if let Some(kind) = StatisticKind::detect(text) {
            return Intent::Statistic(kind);
        }
        let city = self.table.resolve(EntityKind::City, text, self.config.city);
        let province = self
            .table
            .resolve(EntityKind::Province, text, self.config.province);
        match (city, province) {
            // "metro manila" holds the city "manila" in one word, the province in two
            (Some(c), Some(p)) if p.span > c.span => Intent::Province(p.name),
            (Some(c), _) => Intent::City(c.name),
            (None, Some(p)) => Intent::Province(p.name),
            (None, None) => Intent::Unrecognized,
        }
    }

    /// Stateless entry point: classify `text` and answer it.
    pub fn route(&self, text: &str) -> Result<Answer> {
        let intent = self.classify(text);
        tracing::debug!(query = %text, ?intent, "routing query");
        self.dispatch(intent)
    }

    pub(crate) fn dispatch(&self, intent: Intent) -> Result<Answer> {
        match intent {
            Intent::Exit => Ok(Answer::farewell()),
            Intent::Statistic(kind) => Ok(Answer::Statistic(self.table.statistic(kind)?)),
            Intent::City(name) => Ok(Answer::CityRows(self.table.city_rows(&name))),
            Intent::Province(name) => Ok(Answer::ProvinceSummary(
                self.table.province_summary(&name)?,
            )),
            Intent::Unrecognized => Ok(Answer::unrecognized()),
        }
    }

    /// Resolves `text` as a city and returns its rows.
    pub fn lookup_city(&self, text: &str) -> Answer {
        match self.table.resolve(EntityKind::City, text, self.config.city) {
            Some(hit) => Answer::CityRows(self.table.city_rows(&hit.name)),
            None => Answer::NotFound {
                entity: EntityKind::City,
                query: fold_key(text),
            },
        }
    }

    /// Resolves `text` as a province and summarizes it.
    pub fn lookup_province(&self, text: &str) -> Result<Answer> {
        match self
            .table
            .resolve(EntityKind::Province, text, self.config.province)
        {
            Some(hit) => Ok(Answer::ProvinceSummary(
                self.table.province_summary(&hit.name)?,
            )),
            None => Ok(Answer::NotFound {
                entity: EntityKind::Province,
                query: fold_key(text),
            }),
        }
    }

    /// Answers a statistic keyword in `text`.
    pub fn lookup_statistic(&self, text: &str) -> Result<Answer> {
        match StatisticKind::detect(text) {
            Some(kind) => Ok(Answer::Statistic(self.table.statistic(kind)?)),
            None => Ok(Answer::UnknownStatistic {
                query: fold_key(text),
            }),
        }
    }
}
