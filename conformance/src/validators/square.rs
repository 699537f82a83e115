//! Construction validator.
//!
//! Builds each configured square by the Siamese method and checks:
//! - every row, column and diagonal sums to the first-row constant
//! - that constant equals `S(n, 2, start)`
//!
//! Even orders cannot be built and are reported as not applicable.

use amestoy::{
    amestoy_vazquez_constant, classical_magic_constant, MagicSquare, SquareError,
};
use tracing::{debug, warn};

use crate::battery::{Battery, SquareCase};
use crate::report::{ConformanceReport, TestResult, VerificationResult};

const AGREEMENT: &str = "square/agreement";
const LINES: &str = "square/lines";

/// Validates every square case in `battery`.
pub fn validate(battery: &Battery) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    for case in &battery.squares {
        validate_case(case, battery.tolerance, &mut report);
    }
    report
}

fn validate_case(case: &SquareCase, tolerance: f64, report: &mut ConformanceReport) {
    let label = format!("n={}, start={}", case.order, case.start);

    let square = match MagicSquare::siamese(case.order, case.start) {
        Ok(square) => square,
        Err(SquareError::UnsupportedOrder { .. }) => {
            debug!(order = case.order, "skipping even order");
            report.push(TestResult::skip(
                AGREEMENT,
                format!("{label}: not applicable, n is even"),
            ));
            return;
        }
        Err(err @ SquareError::TooLarge { .. }) => {
            warn!(order = case.order, "square cannot be built");
            report.push(TestResult::fail(AGREEMENT, format!("{label}: {err}")));
            return;
        }
    };

    let off = square
        .line_sums()
        .off_by(square.magic_constant(), tolerance);
    if off.is_empty() {
        report.push(TestResult::pass(
            LINES,
            format!("{label}: all {} lines sum to {}", 2 * case.order + 2, square.magic_constant()),
        ));
    } else {
        warn!(order = case.order, start = case.start, lines = off.len(), "square is not magic");
        report.push(TestResult::fail_with_details(
            LINES,
            format!("{label}: {} line(s) differ from row 0", off.len()),
            off.iter().map(|(line, sum)| format!("{line} sums to {sum}")).collect(),
        ));
    }

    let predicted = amestoy_vazquez_constant(case.order as i64, 2, case.start);
    let verification = VerificationResult::compare(predicted, square.magic_constant(), tolerance);
    debug!(
        order = case.order,
        start = case.start,
        predicted,
        actual = verification.actual,
        "compared square"
    );

    let mut details = Vec::new();
    if case.start == 1.0 {
        details.push(format!(
            "classical formula: {}",
            classical_magic_constant(case.order as i64)
        ));
    }
    details.push(format!("actual constant: {}", verification.actual));
    details.push(format!("our prediction:  {}", verification.predicted));
    details.push(format!("error: {:.10}", verification.error));

    if !verification.matched {
        warn!(
            order = case.order,
            start = case.start,
            predicted,
            actual = verification.actual,
            "constant disagrees with formula"
        );
    }
    let outcome = if verification.matched { "match" } else { "no match" };
    report.push(
        TestResult::from_verification(AGREEMENT, format!("{label}: {outcome}"), verification)
            .with_details(details),
    );
}
