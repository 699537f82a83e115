//! Progression validator.
//!
//! For dimensions other than 2 no hypercube is built. Instead the closed
//! form is compared with the progression total divided among its
//! `n^(d−1)` parallel lines, for each square case's `(n, start)` and
//! every `d` in `1..=progression_max_dimension`, plus each formula case
//! at its own `(n, d, a)`. Orders below 1 describe no progression and are
//! reported as not applicable.

use amestoy::{amestoy_vazquez_constant, approx_eq, progression_line_sum};

use crate::battery::Battery;
use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "formula/progression";

/// Cross-checks the closed form against the progression it describes.
pub fn validate(battery: &Battery) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    let max_d = battery.progression_max_dimension;

    for case in &battery.squares {
        let n = case.order as i64;
        if n < 1 {
            report.push(not_applicable(format!("n={}, start={}", case.order, case.start)));
            continue;
        }
        let failures: Vec<String> = (1..=max_d)
            .filter_map(|d| mismatch(n, d, case.start, battery.tolerance))
            .collect();
        report.push(outcome(
            format!("n={}, start={}, d = 1..={max_d}", case.order, case.start),
            failures,
        ));
    }

    for case in &battery.formulas {
        if case.order < 1 {
            report.push(not_applicable(format!(
                "n={}, d={}, start={}",
                case.order, case.dimension, case.start
            )));
            continue;
        }
        let failures = mismatch(case.order, case.dimension, case.start, battery.tolerance)
            .into_iter()
            .collect();
        report.push(outcome(
            format!("n={}, d={}, start={}", case.order, case.dimension, case.start),
            failures,
        ));
    }

    report
}

fn mismatch(n: i64, d: i32, a: f64, tolerance: f64) -> Option<String> {
    let closed = amestoy_vazquez_constant(n, d, a);
    let direct = progression_line_sum(n, d, a);
    (!approx_eq(closed, direct, tolerance))
        .then(|| format!("d={d}: closed form {closed}, progression {direct}"))
}

fn not_applicable(label: String) -> TestResult {
    TestResult::skip(VALIDATOR, format!("{label}: not applicable, n is not positive"))
}

fn outcome(label: String, failures: Vec<String>) -> TestResult {
    if failures.is_empty() {
        TestResult::pass(VALIDATOR, format!("{label}: closed form matches progression"))
    } else {
        TestResult::fail_with_details(VALIDATOR, format!("{label}: mismatch"), failures)
    }
}
