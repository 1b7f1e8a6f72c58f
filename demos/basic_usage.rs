//! Basic usage example for fichat-rs
//!
//! This example demonstrates how to:
//! - Load the bundled dataset
//! - Ask single questions about cities, provinces and statistics
//! - Resolve a misspelled name directly

use fichat_rs::prelude::*;
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== fichat-rs Basic Usage Example ===\n");

    println!("Loading reference table...");
    let table = FiTable::load()?;
    let stats = table.stats();
    println!(
        "✓ {} rows, {} cities, {} provinces, {} FIs in total\n",
        stats.rows, stats.cities, stats.provinces, stats.total_fis
    );

    println!("--- Example 1: Fuzzy name resolution ---");
    for query in ["quezn city", "cebu cty", "atlantis"] {
        match table.resolve(EntityKind::City, query, MatchPolicy::new(Scorer::Ratio, 80)) {
            Some(hit) => println!("  {query:?} -> {} (score {})", hit.name, hit.score),
            None => println!("  {query:?} -> no match"),
        }
    }
    println!();

    let router = Router::with_defaults(Arc::new(table));
    println!("--- Example 2: Single questions ---");
    for query in ["Davao City", "metro manila", "average", "lowest", "what's up?"] {
        println!("Q: {query}");
        println!("{}\n", router.route(query)?);
    }

    println!("--- Example 3: JSON payloads ---");
    let answer = router.route("Cebu")?;
    println!(
        "{}",
        serde_json::to_string_pretty(&answer).unwrap_or_default()
    );

    Ok(())
}
