//! Student Management System
//!
//! Loads the sample roster and prints either the full text report or a
//! JSON export of every student.
//!
//! Run with:
//!   cargo run --example student_report -- --report
//!   cargo run --example student_report -- --json
//!   cargo run --example student_report -- --config roster.json --report
//!
//! Set `RUST_LOG=roster_db=debug` to see store activity.

use std::env;
use std::fs;

use anyhow::{bail, Context, Result};
use roster_db::config::StoreConfig;
use roster_db::{export, sample};
use tracing_subscriber::EnvFilter;

enum Output {
    Report,
    Json,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut output = Output::Report;
    let mut config = StoreConfig::default();

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--report" => output = Output::Report,
            "--json" => output = Output::Json,
            "--config" => {
                let path = args.next().context("--config needs a file path")?;
                let json = fs::read_to_string(&path)
                    .with_context(|| format!("reading config {path}"))?;
                config = StoreConfig::from_json(&json)
                    .with_context(|| format!("parsing config {path}"))?;
            }
            other => {
                eprintln!("Usage: student_report [--config <file>] [--report | --json]");
                bail!("unknown argument: {other}");
            }
        }
    }

    let store = sample::roster_with_config(config)?;
    tracing::info!(
        students = store.len(),
        courses = store.course_count(),
        "sample roster loaded"
    );

    match output {
        Output::Report => println!("{}", store.report()),
        Output::Json => println!("{}", export::to_json(&store)?),
    }

    Ok(())
}
