//! Known-value validator: evaluates `S(n, d, a)` for each formula case and
//! compares it with the stated expectation.

use amestoy::amestoy_vazquez_constant;
use tracing::{debug, warn};

use crate::battery::Battery;
use crate::report::{ConformanceReport, TestResult, VerificationResult};

/// Validates every formula case in `battery`.
pub fn validate(battery: &Battery) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    for case in &battery.formulas {
        let result = amestoy_vazquez_constant(case.order, case.dimension, case.start);
        debug!(n = case.order, d = case.dimension, a = case.start, result, "evaluated formula");
        let verification = VerificationResult::compare(result, case.expected, battery.tolerance);
        if !verification.matched {
            warn!(
                n = case.order,
                d = case.dimension,
                a = case.start,
                result,
                expected = case.expected,
                "formula disagrees with expected value"
            );
        }
        let message = format!(
            "S({},{},{}) = {}, expected {}",
            case.order, case.dimension, case.start, result, case.expected
        );
        report.push(TestResult::from_verification(
            "formula/examples",
            message,
            verification,
        ));
    }
    report
}
