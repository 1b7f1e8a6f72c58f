// crates/fichat-core/src/lib.rs

//! # fichat-core
//!
//! Answers free-text questions about per-city financial-institution (FI)
//! counts. Place names are matched approximately, so `"quezn city"` still
//! finds Quezon City.
//!
//! ```rust
//! use fichat_core::prelude::*;
//! use std::sync::Arc;
//!
//! let table = FiTable::from_records(vec![
//!     FiRecordRaw::new("Quezon City", "Metro Manila", 120),
//!     FiRecordRaw::new("Manila", "Metro Manila", 95),
//!     FiRecordRaw::new("Davao City", "Davao del Sur", 60),
//! ])?;
//! let router = Router::with_defaults(Arc::new(table));
//!
//! let answer = router.route("average")?;
//! assert_eq!(
//!     answer.to_string(),
//!     "The average number of financial institutions per city is 91.67"
//! );
//! # Ok::<(), fichat_core::FiError>(())
//! ```

pub mod answer;
pub mod common;
pub mod error;
pub mod loader;
pub mod model;
pub mod prelude;
#[doc(hidden)]
pub mod raw;
pub mod resolve;
pub mod router;
pub mod session;
pub mod similarity;
pub mod stats;
pub mod store;
pub mod text;

// Re-exports
pub use crate::answer::{Answer, Reply};
pub use crate::common::TableStats;
pub use crate::error::{FiError, Result};
pub use crate::model::{FiRecord, FiTable};
pub use crate::raw::FiRecordRaw;
pub use crate::resolve::{EntityKind, MatchPolicy, Resolved};
pub use crate::router::{Intent, Router, RouterConfig};
pub use crate::session::{Category, Phase, Session};
pub use crate::similarity::Scorer;
pub use crate::stats::StatisticKind;
pub use crate::store::{SessionId, SessionStore};
