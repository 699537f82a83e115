//! `amestoy-verify`: Checks the Amestoy-Vázquez formula against constructed
//! magic squares and known values.
//!
//! Runs the verification battery across:
//! - Siamese-method squares (line sums, agreement with `S(n, 2, a)`)
//! - Documented formula values
//! - The classical reduction `S(n, 2, 1) = n(n² + 1)/2`
//! - The progression cross-check for `d ≠ 2`
//!
//! **Usage:**
//! ```
//! amestoy-verify [--cases <file.toml>] [--tolerance <f64>] [--json]
//! ```
//!
//! Exits non-zero if any check fails.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process;

use amestoy_conformance::{run_all, Battery, ConformanceReport, Severity};
use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Run the Amestoy-Vázquez verification battery.
#[derive(Parser)]
#[command(
    name = "amestoy-verify",
    about = "Verify the Amestoy-Vázquez formula against actual magic squares"
)]
struct Args {
    /// TOML file replacing the built-in case battery.
    #[arg(long)]
    cases: Option<PathBuf>,

    /// Comparison tolerance (overrides the battery's).
    #[arg(long)]
    tolerance: Option<f64>,

    /// Print the report as JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut battery = match &args.cases {
        Some(path) => Battery::load(path)?,
        None => Battery::default(),
    };
    if let Some(tolerance) = args.tolerance {
        battery = battery.with_tolerance(tolerance);
    }

    let report = run_all(&battery)?;

    if args.json {
        let json =
            serde_json::to_string_pretty(&report).context("Failed to serialize report to JSON")?;
        println!("{json}");
    } else {
        print_report(&report);
    }

    let code = exit_code(&report);
    if code != 0 {
        eprintln!(
            "Verification FAILED: {} check(s) did not match.",
            report.failure_count()
        );
        process::exit(code);
    }
    Ok(())
}

/// 0 when every applicable check passed, 1 otherwise.
fn exit_code(report: &ConformanceReport) -> i32 {
    i32::from(!report.all_passed())
}

fn print_header(text: &str) {
    println!();
    println!("{}", "=".repeat(60));
    println!("{text}");
    println!("{}", "=".repeat(60));
}

fn print_report(report: &ConformanceReport) {
    print_header("AMESTOY-VÁZQUEZ MATHEMATICAL VERIFICATION");
    println!("Goal: Verify the generalization works mathematically");
    println!("Method: Compare formula against ACTUAL magic squares");
    println!();

    for result in &report.results {
        let status = match result.severity {
            Severity::Pass => "PASS",
            Severity::Skipped => "SKIP",
            Severity::Failure => "FAIL",
        };
        println!("[{}] {}: {}", status, result.validator, result.message);
        for detail in &result.details {
            println!("       {}", detail);
        }
    }

    print_header("VERIFICATION SUMMARY");
    let applicable = report.results.len() - report.skipped_count();
    println!(
        "Passed: {}/{} checks ({} not applicable)",
        report.pass_count(),
        applicable,
        report.skipped_count()
    );

    if report.all_passed() {
        println!("All checks passed. The formula holds for tested cases.");
    } else {
        println!("Some checks failed. Need to investigate.");
    }
}
