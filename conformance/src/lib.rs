//! Amestoy-Vázquez verification suite.
//!
//! Checks the closed-form constant `S(n, d, a) = n·a + n·(n^d − 1)/2`
//! against independent ground truth and aggregates the outcome into one
//! report.
//!
//! # Validators
//!
//! | Validator | Ground truth |
//! |-----------|--------------|
//! | `square/lines` | Siamese-method square, all lines equal |
//! | `square/agreement` | Siamese-method square vs `S(n, 2, a)` |
//! | `formula/examples` | Documented input → output pairs |
//! | `formula/classical` | `n·(n² + 1)/2` at `d = 2, a = 1` |
//! | `formula/progression` | Progression total over `n^(d−1)` lines |
//!
//! # Entry Point
//!
//! ```
//! use amestoy_conformance::{run_all, Battery};
//!
//! let report = run_all(&Battery::default()).expect("default battery is valid");
//! assert!(report.all_passed());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod battery;
pub mod report;
pub mod validators;

use tracing::info;

pub use battery::{Battery, FormulaCase, SquareCase};
pub use report::{ConformanceReport, Severity, TestResult, VerificationResult};

/// Runs all validators over `battery` and returns the aggregated report.
///
/// Validators are run in this order:
/// 1. Square construction (line sums, then agreement with `S(n, 2, a)`)
/// 2. Formula examples
/// 3. Classical reduction
/// 4. Progression cross-check
///
/// # Errors
///
/// Returns an error only if the battery itself is unusable.
pub fn run_all(battery: &Battery) -> anyhow::Result<ConformanceReport> {
    battery.check()?;

    let mut report = ConformanceReport::new();
    let stages: [(&str, fn(&Battery) -> ConformanceReport); 4] = [
        ("square", validators::square::validate),
        ("formula", validators::formula::validate),
        ("classical", validators::classical::validate),
        ("progression", validators::progression::validate),
    ];

    for (name, validate) in stages {
        let stage = validate(battery);
        info!(
            validator = name,
            passed = stage.pass_count(),
            skipped = stage.skipped_count(),
            failed = stage.failure_count(),
            "validator finished"
        );
        report.extend(stage);
    }

    Ok(report)
}
