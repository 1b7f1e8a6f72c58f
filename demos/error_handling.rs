//! Error handling example for fichat-rs
//!
//! Lookup misses are answers; broken data is an error.

use fichat_rs::prelude::*;
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== fichat-rs Error Handling Example ===\n");

    println!("--- Example 1: Loading a dataset that does not exist ---");
    match FiTable::load_from_path("no/such/file.csv") {
        Ok(_) => println!("✓ unexpectedly loaded"),
        Err(e) => println!("✗ {e}"),
    }
    println!();

    println!("--- Example 2: Malformed rows ---");
    let bad = "Cities,Province,Total Number of Fis\nManila,Metro Manila,lots\n";
    match FiTable::from_csv_reader(bad.as_bytes()) {
        Ok(_) => println!("✓ unexpectedly parsed"),
        Err(e) => println!("✗ {e}"),
    }
    println!();

    println!("--- Example 3: Names that do not match ---");
    let router = Router::with_defaults(Arc::new(FiTable::load()?));
    println!("{}", router.lookup_city("Gotham"));
    println!("{}", router.lookup_province("Westeros")?);
    println!("{}", router.lookup_statistic("median")?);
    println!();

    println!("--- Example 4: Empty tables cannot produce statistics ---");
    let empty = Router::with_defaults(Arc::new(FiTable::from_records(Vec::new())?));
    match empty.route("average") {
        Ok(answer) => println!("{answer}"),
        Err(e) => println!("✗ {e}"),
    }

    Ok(())
}
