//! `amestoy-constant`: Computes `S(n, d, a)` from values typed at the prompt.
//!
//! Asks for the side length, the dimension and the starting value (empty
//! means 1), then prints the invariance constant. A value passed as a flag
//! is not asked for.
//!
//! **Usage:**
//! ```
//! amestoy-constant [--n <int>] [--d <int>] [--start <float>]
//! ```
//!
//! Malformed input prints a generic error; the exit status stays 0.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use amestoy::FormulaParameters;
use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Compute the Amestoy-Vázquez invariance constant.
#[derive(Parser, Default)]
#[command(
    name = "amestoy-constant",
    about = "Compute the invariance constant S(n, d, a) of a hypercube"
)]
struct Args {
    /// Side length n (prompted for if absent).
    #[arg(long)]
    n: Option<i64>,

    /// Dimension d (prompted for if absent).
    #[arg(long)]
    d: Option<i32>,

    /// Starting value a (prompted for if absent; empty input means 1).
    #[arg(long)]
    start: Option<f64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    run(&args, &mut io::stdin().lock(), &mut io::stdout().lock())?;
    Ok(())
}

fn run(args: &Args, input: &mut impl BufRead, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "--- Amestoy Vazquez Theorem Tool ---")?;

    let Some((n, d, start)) = read_values(args, input, out)? else {
        writeln!(out, "Error: Please enter valid numbers.")?;
        return Ok(());
    };

    match FormulaParameters::new(n, d, start) {
        Ok(params) => {
            let constant = params.constant();
            debug!(n, d, start, constant, "evaluated constant");
            writeln!(out)?;
            writeln!(out, "[Result] The Invariance Constant is: {constant:?}")?;
            writeln!(out, "{}", "-".repeat(36))?;
        }
        Err(err) => writeln!(out, "Error: {err}")?,
    }
    Ok(())
}

/// Reads the three values in order, stopping at the first malformed one.
fn read_values(
    args: &Args,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> io::Result<Option<(i64, i32, f64)>> {
    let n = match args.n {
        Some(n) => n,
        None => match ask(input, out, "Enter side length (n): ", None)? {
            Some(n) => n,
            None => return Ok(None),
        },
    };
    let d = match args.d {
        Some(d) => d,
        None => match ask(input, out, "Enter dimensions (d): ", None)? {
            Some(d) => d,
            None => return Ok(None),
        },
    };
    let start = match args.start {
        Some(a) => a,
        None => match ask(input, out, "Enter starting value (default 1): ", Some(1.0))? {
            Some(a) => a,
            None => return Ok(None),
        },
    };
    Ok(Some((n, d, start)))
}

/// Prints `prompt`, reads one line and parses it. Blank input yields
/// `default`; unparsable input yields `None`.
fn ask<T: FromStr>(
    input: &mut impl BufRead,
    out: &mut impl Write,
    prompt: &str,
    default: Option<T>,
) -> io::Result<Option<T>> {
    write!(out, "{prompt}")?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    let line = line.trim();
    if line.is_empty() {
        return Ok(default);
    }
    Ok(line.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(args: &Args, typed: &str) -> String {
        let mut out = Vec::new();
        run(args, &mut typed.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn prompts_and_prints_constant() {
        let text = session(&Args::default(), "3\n2\n1\n");
        assert!(text.contains("Enter side length (n): "));
        assert!(text.contains("Enter dimensions (d): "));
        assert!(text.contains("[Result] The Invariance Constant is: 15.0"));
    }

    #[test]
    fn blank_start_defaults_to_one() {
        let text = session(&Args::default(), "4\n2\n\n");
        assert!(text.contains("The Invariance Constant is: 34.0"));
    }

    #[test]
    fn fractional_start() {
        let text = session(&Args::default(), "5\n3\n500.5\n");
        assert!(text.contains("The Invariance Constant is: 2812.5"));
    }

    #[test]
    fn malformed_number_stops_the_session() {
        let text = session(&Args::default(), "three\n2\n1\n");
        assert!(text.ends_with("Error: Please enter valid numbers.\n"));
        assert!(!text.contains("Enter dimensions"));
    }

    #[test]
    fn blank_order_is_malformed() {
        let text = session(&Args::default(), "\n");
        assert!(text.contains("Error: Please enter valid numbers."));
    }

    #[test]
    fn non_positive_order_is_rejected() {
        let text = session(&Args::default(), "0\n2\n1\n");
        assert!(text.contains("Error: invalid parameters: order 0 and dimension 2"));
        assert!(!text.contains("[Result]"));
    }

    #[test]
    fn flags_skip_their_prompts() {
        let args = Args {
            n: Some(3),
            d: Some(2),
            start: None,
        };
        let text = session(&args, "100\n");
        assert!(!text.contains("Enter side length"));
        assert!(text.contains("Enter starting value (default 1): "));
        assert!(text.contains("The Invariance Constant is: 312.0"));
    }
}
