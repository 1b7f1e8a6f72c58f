// crates/fichat-core/src/prelude.rs
pub use crate::answer::{Answer, CityCount, CityRow, ProvinceSummary, Reply, StatisticAnswer};
pub use crate::error::{FiError, Result};
pub use crate::model::{FiRecord, FiTable};
pub use crate::raw::FiRecordRaw;
pub use crate::resolve::{EntityKind, MatchPolicy};
pub use crate::router::{Router, RouterConfig};
pub use crate::session::{Category, Session};
pub use crate::similarity::Scorer;
pub use crate::store::SessionStore;
