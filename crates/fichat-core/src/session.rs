// crates/fichat-core/src/session.rs

//! Multi-turn conversation state.
//!
//! The state is a plain value: [`Router::converse`] takes the current
//! [`Session`] and returns the next one. Nothing is stored inside the router,
//! so concurrent conversations only share the read-only table.

use crate::answer::{Answer, Reply};
use crate::error::Result;
use crate::router::{Intent, Router};
use crate::text::contains_phrase;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const CATEGORY_PROMPT: &str =
    "Would you like to ask about a city, a province, or statistics?";

const CONTINUE_KEYWORD: &str = "continue";
const SWITCH_KEYWORD: &str = "switch";

/// What the user is currently browsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    City,
    Province,
    Statistic,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::City, Category::Province, Category::Statistic];

    /// The token whose presence (as a substring) selects this category.
    fn token(self) -> &'static str {
        match self {
            Category::City => "city",
            Category::Province => "province",
            Category::Statistic => "statistic",
        }
    }

    /// First category named in `text`, checked in city, province, statistics order.
    pub fn detect(text: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| contains_phrase(text, c.token()))
    }

    /// The other two categories, in declaration order.
    pub fn alternatives(self) -> [Category; 2] {
        match self {
            Category::City => [Category::Province, Category::Statistic],
            Category::Province => [Category::City, Category::Statistic],
            Category::Statistic => [Category::City, Category::Province],
        }
    }

    pub fn value_prompt(self) -> &'static str {
        match self {
            Category::City => "Which city would you like to know about?",
            Category::Province => "Which province would you like to know about?",
            Category::Statistic => {
                "Which statistic would you like: the average, the highest or the lowest?"
            }
        }
    }

    pub fn next_prompt(self) -> String {
        let [a, b] = self.alternatives();
        format!(
            "Type '{CONTINUE_KEYWORD}' to ask about another {}, or '{SWITCH_KEYWORD}' to ask about {} or {} instead.",
            self,
            a.plural(),
            b.plural()
        )
    }

    fn plural(self) -> &'static str {
        match self {
            Category::City => "cities",
            Category::Province => "provinces",
            Category::Statistic => "statistics",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::City => f.write_str("city"),
            Category::Province => f.write_str("province"),
            Category::Statistic => f.write_str("statistic"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "phase", content = "category", rename_all = "snake_case")]
pub enum Phase {
    /// Nothing chosen yet.
    #[default]
    Idle,
    /// Asked which category to browse.
    AwaitingCategory,
    /// Asked for a name or statistic keyword in this category.
    AwaitingValue(Category),
    /// Delivered an answer; asked continue-or-switch.
    AnsweredAwaitingNext(Category),
}

/// Per-conversation state. A fresh value is the start of a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Session {
    pub phase: Phase,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_category(&self) -> Option<Category> {
        match self.phase {
            Phase::AwaitingValue(c) | Phase::AnsweredAwaitingNext(c) => Some(c),
            Phase::Idle | Phase::AwaitingCategory => None,
        }
    }

    /// The bot asked something and is waiting for the reply.
    pub fn awaiting_clarification(&self) -> bool {
        self.phase != Phase::Idle
    }

    fn at(phase: Phase) -> Self {
        Self { phase }
    }
}

impl Router {
    /// Multi-turn entry point.
    ///
    /// The exit keyword is honoured in every phase and always yields a fresh
    /// session. Unexpected input re-prompts without changing the state.
    pub fn converse(&self, text: &str, session: Session) -> Result<(Reply, Session)> {
        if self.is_exit(text) {
            return Ok((Reply::new(Answer::farewell()), Session::new()));
        }

        let (reply, next) = match session.phase {
            Phase::Idle => self.converse_idle(text)?,
            Phase::AwaitingCategory => match Category::detect(text) {
                Some(category) => (
                    Reply::new(Answer::prompt(category.value_prompt())),
                    Session::at(Phase::AwaitingValue(category)),
                ),
                None => (Reply::new(Answer::prompt(CATEGORY_PROMPT)), session),
            },
            Phase::AwaitingValue(category) => {
                let answer = self.answer_in(category, text)?;
                if answer.is_data() {
                    (
                        Reply::with_prompt(answer, category.next_prompt()),
                        Session::at(Phase::AnsweredAwaitingNext(category)),
                    )
                } else {
                    (Reply::with_prompt(answer, category.value_prompt()), session)
                }
            }
            Phase::AnsweredAwaitingNext(category) => {
                if contains_phrase(text, CONTINUE_KEYWORD) {
                    (
                        Reply::new(Answer::prompt(category.value_prompt())),
                        Session::at(Phase::AwaitingValue(category)),
                    )
                } else if contains_phrase(text, SWITCH_KEYWORD) {
                    (
                        Reply::new(Answer::prompt(CATEGORY_PROMPT)),
                        Session::at(Phase::AwaitingCategory),
                    )
                } else {
                    (Reply::new(Answer::prompt(category.next_prompt())), session)
                }
            }
        };

        tracing::debug!(from = ?session.phase, to = ?next.phase, "conversation step");
        Ok((reply, next))
    }

    /// First turn: answer a recognizable query directly, otherwise steer the
    /// user towards a category.
    fn converse_idle(&self, text: &str) -> Result<(Reply, Session)> {
        let intent = self.classify(text);
        let category = match &intent {
            Intent::City(_) => Some(Category::City),
            Intent::Province(_) => Some(Category::Province),
            Intent::Statistic(_) => Some(Category::Statistic),
            Intent::Exit | Intent::Unrecognized => None,
        };

        if let Some(category) = category {
            let answer = self.dispatch(intent)?;
            return Ok((
                Reply::with_prompt(answer, category.next_prompt()),
                Session::at(Phase::AnsweredAwaitingNext(category)),
            ));
        }

        Ok(match Category::detect(text) {
            Some(category) => (
                Reply::new(Answer::prompt(category.value_prompt())),
                Session::at(Phase::AwaitingValue(category)),
            ),
            None => (
                Reply::with_prompt(Answer::unrecognized(), CATEGORY_PROMPT),
                Session::at(Phase::AwaitingCategory),
            ),
        })
    }

    /// The active category restricts what the text may resolve to.
    fn answer_in(&self, category: Category, text: &str) -> Result<Answer> {
        match category {
            Category::City => Ok(self.lookup_city(text)),
            Category::Province => self.lookup_province(text),
            Category::Statistic => self.lookup_statistic(text),
        }
    }
}
