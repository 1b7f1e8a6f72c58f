//! Workspace facade: re-exports `fichat-core` so the demos can use
//! `fichat_rs::prelude::*`.

pub use fichat_core::*;
