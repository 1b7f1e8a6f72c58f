//! fichat-cli
//! ==========
//!
//! Command-line front end for the `fichat-core` query responder.
//!
//! This crate primarily provides a binary (`fichat`). The library target only
//! exists so the crate renders a documentation page.
//!
//! Basic usage:
//!
//! ```text
//! fichat ask "how many financial institutions are in quezn city"
//! fichat ask metro manila --json
//! fichat chat
//! fichat stats
//! fichat cities --province cebu
//! fichat build data/fi_cities.bin.gz
//! ```
//!
//! For programmatic access use the [`fichat-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
