//! `amestoy-demo`: Prints the documented formula values and, on request, a
//! Siamese-method square with its realized constant.
//!
//! **Usage:**
//! ```
//! amestoy-demo [--square <odd n>] [--start <float>]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use amestoy::{amestoy_vazquez_constant, approx_eq, MagicSquare, DEFAULT_TOLERANCE};
use amestoy_conformance::Battery;
use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Demonstrate the Amestoy-Vázquez formula.
#[derive(Parser)]
#[command(name = "amestoy-demo", about = "Amestoy-Vázquez formula demo")]
struct Args {
    /// Also build and print a magic square of this order.
    #[arg(long)]
    square: Option<usize>,

    /// Starting value of the printed square.
    #[arg(long, default_value_t = 1.0)]
    start: f64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    println!("Amestoy-Vázquez Conjecture Demo");
    println!("{}", "=".repeat(40));

    for case in Battery::default().formulas {
        let result = amestoy_vazquez_constant(case.order, case.dimension, case.start);
        let status = if approx_eq(result, case.expected, DEFAULT_TOLERANCE) {
            "✓"
        } else {
            "✗"
        };
        println!(
            "{} S({},{},{}) = {:?}",
            status, case.order, case.dimension, case.start, result
        );
    }

    if let Some(order) = args.square {
        let square = MagicSquare::siamese(order, args.start)
            .with_context(|| format!("Cannot build a square of order {order}"))?;
        println!();
        print!("{square}");
        println!(
            "Realized constant: {:?}, S({order},2,{}) = {:?}",
            square.magic_constant(),
            args.start,
            amestoy_vazquez_constant(order as i64, 2, args.start)
        );
    }

    Ok(())
}
