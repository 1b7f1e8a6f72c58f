// crates/fichat-core/src/resolve.rs

//! Entity resolution: map noisy user text onto one canonical name.

use crate::similarity::{Scorer, MAX_SCORE};
use crate::text::{fold_key, words};
use crate::FiTable;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which candidate pool a lookup runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    City,
    Province,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::City => f.write_str("city"),
            EntityKind::Province => f.write_str("province"),
        }
    }
}

/// Scorer plus the minimum score (inclusive) a match must reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchPolicy {
    #[serde(default)]
    pub scorer: Scorer,
    pub threshold: u8,
}

impl MatchPolicy {
    pub const fn new(scorer: Scorer, threshold: u8) -> Self {
        Self { scorer, threshold }
    }
}

/// Longest word window tried inside a sentence.
const MAX_WINDOW_WORDS: usize = 6;

/// The winning candidate and its score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolved {
    pub name: String,
    pub score: u8,
    /// How many query words the match covered.
    pub span: usize,
}

/// The folded query itself, then every contiguous word window of it,
/// longest first.
fn query_spans(q: &str) -> Vec<(String, usize)> {
    let tokens: Vec<&str> = words(q).collect();
    let n = tokens.len();
    let mut spans = vec![(q.to_owned(), n)];
    for len in (1..n.min(MAX_WINDOW_WORDS + 1)).rev() {
        for window in tokens.windows(len) {
            spans.push((window.join(" "), len));
        }
    }
    spans
}

/// Finds the best-scoring candidate for `query`.
///
/// The query is folded first; candidates are expected to be folded already.
/// Each candidate is scored against the whole query and against every word
/// window of it, so `"tell me about cebu city"` still reaches `"cebu city"`.
/// Returns `None` for an empty pool or when the best score is below the
/// policy threshold. On equal scores the earliest candidate wins, and within
/// one candidate the longest span wins.
pub fn resolve<S: AsRef<str>>(query: &str, candidates: &[S], policy: MatchPolicy) -> Option<Resolved> {
    let q = fold_key(query);
    let spans = query_spans(&q);
    let mut best: Option<(&str, u8, usize)> = None;

    for candidate in candidates {
        let name = candidate.as_ref();
        let mut top = (0u8, spans[0].1);
        for (text, span) in &spans {
            let score = policy.scorer.score(text, name);
            if score > top.0 {
                top = (score, *span);
            }
        }
        let (score, span) = top;
        if best.map_or(true, |(_, s, _)| score > s) {
            best = Some((name, score, span));
            if score == MAX_SCORE {
                break;
            }
        }
    }

    let (name, score, span) = best?;
    if score < policy.threshold {
        tracing::trace!(query = %q, best = name, score, threshold = policy.threshold, "no match above threshold");
        return None;
    }
    Some(Resolved {
        name: name.to_owned(),
        score,
        span,
    })
}

impl FiTable {
    /// Candidate pool for `kind`.
    pub fn names(&self, kind: EntityKind) -> &[String] {
        match kind {
            EntityKind::City => self.city_names(),
            EntityKind::Province => self.province_names(),
        }
    }

    /// Resolves `query` against the city or province pool of this table.
    pub fn resolve(&self, kind: EntityKind, query: &str, policy: MatchPolicy) -> Option<Resolved> {
        resolve(query, self.names(kind), policy)
    }
}
