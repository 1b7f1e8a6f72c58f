// crates/fichat-core/src/answer.rs

//! Response payloads handed to the request boundary.
//!
//! Every reply is one tagged [`Answer`]; the boundary can serialize it as JSON
//! (`kind` discriminator) or print it through `Display`.

use crate::resolve::EntityKind;
use crate::stats::StatisticKind;
use serde::Serialize;
use std::fmt;

pub const FAREWELL: &str = "Goodbye! Thanks for asking about financial institutions.";
pub const CLARIFICATION: &str =
    "I'm sorry, I don't understand your query. Please ask about cities, provinces, or statistics.";
pub const UNKNOWN_STATISTIC: &str =
    "Statistics type not recognized. Please ask for the average, highest or lowest.";

/// One row of a city lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityRow {
    pub city: String,
    pub province: String,
    pub fi_count: u32,
}

/// A city and its count inside a province summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityCount {
    pub city: String,
    pub fi_count: u32,
}

/// Aggregate view of a single province.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProvinceSummary {
    pub province: String,
    pub total_fis: u64,
    /// Cities in table order.
    pub cities: Vec<CityCount>,
    pub highest: CityCount,
    pub lowest: CityCount,
}

/// Result of a whole-table statistic.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatisticAnswer {
    pub statistic: StatisticKind,
    pub value: f64,
    /// The row holding the extreme value; `None` for the mean.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<CityRow>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum Answer {
    Farewell(String),
    /// No keyword or entity was recognized.
    Unrecognized(String),
    /// A conversational prompt, including re-prompts for unexpected input.
    Prompt(String),
    /// The resolver found nothing above threshold. Carries the folded input.
    NotFound { entity: EntityKind, query: String },
    UnknownStatistic { query: String },
    CityRows(Vec<CityRow>),
    ProvinceSummary(ProvinceSummary),
    Statistic(StatisticAnswer),
}

impl Answer {
    pub fn farewell() -> Self {
        Answer::Farewell(FAREWELL.to_owned())
    }

    pub fn unrecognized() -> Self {
        Answer::Unrecognized(CLARIFICATION.to_owned())
    }

    pub fn prompt(text: impl Into<String>) -> Self {
        Answer::Prompt(text.into())
    }

    /// Data was delivered (as opposed to a prompt, a miss or a farewell).
    pub fn is_data(&self) -> bool {
        matches!(
            self,
            Answer::CityRows(_) | Answer::ProvinceSummary(_) | Answer::Statistic(_)
        )
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Farewell(msg) | Answer::Unrecognized(msg) | Answer::Prompt(msg) => {
                f.write_str(msg)
            }
            Answer::NotFound { entity, query } => write!(f, "No data found for {entity}: {query}"),
            Answer::UnknownStatistic { .. } => f.write_str(UNKNOWN_STATISTIC),
            Answer::CityRows(rows) => {
                for (i, row) in rows.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(
                        f,
                        "{} ({}): {} financial institutions",
                        row.city, row.province, row.fi_count
                    )?;
                }
                Ok(())
            }
            Answer::ProvinceSummary(s) => {
                writeln!(f, "Province: {}", s.province)?;
                writeln!(f, "Total FIs in province: {}", s.total_fis)?;
                writeln!(f, "Cities and FIs:")?;
                for c in &s.cities {
                    writeln!(f, "  - {}: {}", c.city, c.fi_count)?;
                }
                writeln!(
                    f,
                    "City with highest FIs: {} ({})",
                    s.highest.city, s.highest.fi_count
                )?;
                write!(
                    f,
                    "City with lowest FIs: {} ({})",
                    s.lowest.city, s.lowest.fi_count
                )
            }
            Answer::Statistic(s) => f.write_str(&s.message),
        }
    }
}

/// A multi-turn reply: the answer plus an optional follow-up prompt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reply {
    pub answer: Answer,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
}

impl Reply {
    pub fn new(answer: Answer) -> Self {
        Self {
            answer,
            prompt: None,
        }
    }

    pub fn with_prompt(answer: Answer, prompt: impl Into<String>) -> Self {
        Self {
            answer,
            prompt: Some(prompt.into()),
        }
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.answer)?;
        if let Some(prompt) = &self.prompt {
            write!(f, "\n{prompt}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_carries_the_query() {
        let a = Answer::NotFound {
            entity: EntityKind::City,
            query: "atlantis".into(),
        };
        assert_eq!(a.to_string(), "No data found for city: atlantis");
    }

    #[test]
    fn serializes_with_kind_tag() {
        let a = Answer::NotFound {
            entity: EntityKind::Province,
            query: "narnia".into(),
        };
        let v = serde_json::to_value(&a).unwrap();
        assert_eq!(v["kind"], "not_found");
        assert_eq!(v["data"]["entity"], "province");
        assert_eq!(v["data"]["query"], "narnia");
    }

    #[test]
    fn reply_appends_prompt_on_new_line() {
        let r = Reply::with_prompt(Answer::farewell(), "bye?");
        assert_eq!(r.to_string(), format!("{FAREWELL}\nbye?"));
    }
}
