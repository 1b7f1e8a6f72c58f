//! fichat — command-line front end for fichat-core
//!
//! This binary is the request boundary: it loads the reference table once,
//! turns each line of user text into an answer, and prints it as text or
//! JSON. Lookup misses are ordinary answers; failures inside the data layer
//! are logged and reported with a generic message.
//!
//! Usage examples
//! --------------
//!
//! - One question
//!   $ fichat ask quezn city
//!
//! - A conversation
//!   $ fichat chat
//!
//! - A stricter city match with the substring scorer
//!   $ fichat --scorer partial_ratio --city-threshold 90 ask "tell me about cebu city"
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use fichat_core::prelude::*;
use fichat_core::EntityKind;
use serde::Serialize;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

const FAILURE_MESSAGE: &str = "Sorry, something went wrong while answering that.";

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    let input_path = args.input.clone().unwrap_or_else(|| {
        let dir = FiTable::default_data_dir();
        let filename = FiTable::default_dataset_filename();
        dir.join(filename).to_string_lossy().to_string()
    });
    let table = FiTable::load_from_path(&input_path)
        .with_context(|| format!("failed to load dataset from {input_path}"))?;
    let config = router_config(&args)?;
    let router = Router::new(Arc::new(table), config);

    match args.command {
        Commands::Ask { ref query } => {
            let text = query.join(" ");
            match router.route(&text) {
                Ok(answer) => print_answer(&answer, args.json)?,
                Err(e) => report_failure(&e, args.json)?,
            }
        }

        Commands::Chat => chat(router, args.json)?,

        Commands::Stats => {
            let stats = router.table().stats();
            if args.json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("Dataset statistics:");
                println!("  Rows: {}", stats.rows);
                println!("  Cities: {}", stats.cities);
                println!("  Provinces: {}", stats.provinces);
                println!("  Financial institutions: {}", stats.total_fis);
            }
        }

        Commands::Cities { ref province } => {
            let table = router.table();
            match province {
                None => {
                    for name in table.city_names() {
                        println!("{name}");
                    }
                }
                Some(p) => {
                    let policy = router.config().policy(EntityKind::Province);
                    match table.resolve(EntityKind::Province, p, policy) {
                        Some(hit) => {
                            println!("Cities in {}:", hit.name);
                            for r in table.rows_for_province(&hit.name) {
                                println!("- {} ({})", r.city, r.fi_count);
                            }
                        }
                        None => eprintln!("No province found for: {p}"),
                    }
                }
            }
        }

        Commands::Provinces => {
            for name in router.table().province_names() {
                println!("{name}");
            }
        }

        Commands::Build { ref output } => build(router.table(), output)?,
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Config file first, then command-line overrides.
fn router_config(args: &CliArgs) -> anyhow::Result<RouterConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config {path}"))?;
            serde_json::from_str(&text).with_context(|| format!("invalid config {path}"))?
        }
        None => RouterConfig::default(),
    };

    if let Some(scorer) = args.scorer {
        config.city.scorer = scorer;
        config.province.scorer = scorer;
    }
    if let Some(t) = args.city_threshold {
        config.city.threshold = t;
    }
    if let Some(t) = args.province_threshold {
        config.province.threshold = t;
    }
    tracing::debug!(?config, "router configured");
    Ok(config)
}

fn chat(router: Router, json: bool) -> anyhow::Result<()> {
    let store = SessionStore::new(router);
    let id = store.open();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("{}", fichat_core::session::CATEGORY_PROMPT);
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match store.converse(id, &line) {
            Ok(reply) => {
                print_reply(&reply, json)?;
                if matches!(reply.answer, Answer::Farewell(_)) {
                    break;
                }
            }
            Err(e) => report_failure(&e, json)?,
        }
    }
    store.close(&id);
    Ok(())
}

fn print_answer(answer: &Answer, json: bool) -> anyhow::Result<()> {
    print_value(answer, json)
}

fn print_reply(reply: &Reply, json: bool) -> anyhow::Result<()> {
    print_value(reply, json)
}

fn print_value<T: Serialize + std::fmt::Display>(value: &T, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string(value)?);
    } else {
        println!("{value}");
    }
    Ok(())
}

/// Internal failures get a generic reply, distinct from "no data found".
fn report_failure(err: &FiError, json: bool) -> anyhow::Result<()> {
    tracing::error!(error = %err, "failed to answer query");
    if json {
        println!(
            "{}",
            serde_json::json!({ "kind": "failure", "data": FAILURE_MESSAGE })
        );
    } else {
        println!("{FAILURE_MESSAGE}");
    }
    Ok(())
}

#[cfg(feature = "builder")]
fn build(table: &FiTable, output: &str) -> anyhow::Result<()> {
    table
        .save_as(output)
        .with_context(|| format!("failed to write snapshot {output}"))?;
    println!("Wrote {} rows to {output}", table.records().len());
    Ok(())
}

#[cfg(not(feature = "builder"))]
fn build(_table: &FiTable, _output: &str) -> anyhow::Result<()> {
    anyhow::bail!("this binary was built without the 'builder' feature")
}
