// crates/fichat-core/src/similarity.rs

//! Approximate string similarity on a 0..=100 scale.
//!
//! Both scorers are built on normalized Levenshtein distance (`strsim`).
//! They are not interchangeable: [`Scorer::PartialRatio`] rewards a short
//! query that appears inside a longer name, so `"manila"` scores 100 against
//! `"metro manila"`, while [`Scorer::Ratio`] compares whole strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Highest possible similarity score.
pub const MAX_SCORE: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scorer {
    /// Whole-string edit-distance ratio.
    #[default]
    Ratio,
    /// Best ratio of the shorter string against every same-length window of
    /// the longer one.
    PartialRatio,
}

impl Scorer {
    /// Scores `a` against `b`. Identical non-empty strings score [`MAX_SCORE`];
    /// an empty side always scores 0.
    pub fn score(self, a: &str, b: &str) -> u8 {
        if a.is_empty() || b.is_empty() {
            return 0;
        }
        match self {
            Scorer::Ratio => to_score(strsim::normalized_levenshtein(a, b)),
            Scorer::PartialRatio => partial_ratio(a, b),
        }
    }
}

impl fmt::Display for Scorer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scorer::Ratio => f.write_str("ratio"),
            Scorer::PartialRatio => f.write_str("partial_ratio"),
        }
    }
}

impl FromStr for Scorer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "ratio" => Ok(Scorer::Ratio),
            "partial_ratio" | "partial" => Ok(Scorer::PartialRatio),
            other => Err(format!(
                "unknown scorer '{other}' (expected 'ratio' or 'partial_ratio')"
            )),
        }
    }
}

#[inline]
fn to_score(similarity: f64) -> u8 {
    (similarity.clamp(0.0, 1.0) * f64::from(MAX_SCORE)).round() as u8
}

fn partial_ratio(a: &str, b: &str) -> u8 {
    let a_len = a.chars().count();
    let b_len = b.chars().count();
    let (short, long, short_len, long_len) = if a_len <= b_len {
        (a, b, a_len, b_len)
    } else {
        (b, a, b_len, a_len)
    };

    if short_len == long_len {
        return to_score(strsim::normalized_levenshtein(short, long));
    }

    let long_chars: Vec<char> = long.chars().collect();
    let mut best = 0.0_f64;
    for start in 0..=(long_len - short_len) {
        let window: String = long_chars[start..start + short_len].iter().collect();
        let sim = strsim::normalized_levenshtein(short, &window);
        if sim > best {
            best = sim;
            if best >= 1.0 {
                break;
            }
        }
    }
    to_score(best)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_strings_score_max() {
        for scorer in [Scorer::Ratio, Scorer::PartialRatio] {
            assert_eq!(scorer.score("quezon city", "quezon city"), MAX_SCORE);
        }
    }

    #[test]
    fn empty_side_scores_zero() {
        for scorer in [Scorer::Ratio, Scorer::PartialRatio] {
            assert_eq!(scorer.score("", "manila"), 0);
            assert_eq!(scorer.score("manila", ""), 0);
            assert_eq!(scorer.score("", ""), 0);
        }
    }

    #[test]
    fn ratio_tolerates_a_typo() {
        // one deletion over eleven characters
        assert_eq!(Scorer::Ratio.score("quezn city", "quezon city"), 91);
    }

    #[test]
    fn partial_ratio_finds_embedded_name() {
        assert_eq!(Scorer::PartialRatio.score("manila", "metro manila"), 100);
        assert_eq!(Scorer::PartialRatio.score("metro manila", "manila"), 100);
        assert!(Scorer::Ratio.score("manila", "metro manila") < 80);
    }

    #[test]
    fn partial_ratio_counts_chars_not_bytes() {
        assert_eq!(Scorer::PartialRatio.score("piñas", "las piñas"), 100);
    }

    #[test]
    fn parses_scorer_names() {
        assert_eq!("ratio".parse::<Scorer>().unwrap(), Scorer::Ratio);
        assert_eq!("Partial-Ratio".parse::<Scorer>().unwrap(), Scorer::PartialRatio);
        assert!("jaro".parse::<Scorer>().is_err());
    }
}
