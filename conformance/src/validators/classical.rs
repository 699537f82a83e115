//! Reduction validator: `S(n, 2, 1)` must equal `n·(n² + 1)/2`.

use amestoy::{amestoy_vazquez_constant, approx_eq, classical_magic_constant};

use crate::battery::Battery;
use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "formula/classical";

/// Checks the reduction for every order in `1..=battery.classical_max_order`.
pub fn validate(battery: &Battery) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    let max = battery.classical_max_order;
    if max < 1 {
        report.push(TestResult::skip(VALIDATOR, "no orders configured"));
        return report;
    }

    let failures: Vec<String> = (1..=max)
        .filter_map(|n| {
            let classical = classical_magic_constant(n);
            let general = amestoy_vazquez_constant(n, 2, 1.0);
            (!approx_eq(classical, general, battery.tolerance))
                .then(|| format!("n={n}: classical {classical}, S(n,2,1) {general}"))
        })
        .collect();

    if failures.is_empty() {
        report.push(TestResult::pass(
            VALIDATOR,
            format!("S(n,2,1) = n(n²+1)/2 for n = 1..={max}"),
        ));
    } else {
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            format!("reduction fails for {} order(s)", failures.len()),
            failures,
        ));
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduction_holds_for_default_range() {
        let report = validate(&Battery::default());
        assert!(report.all_passed());
        assert_eq!(report.results[0].message, "S(n,2,1) = n(n²+1)/2 for n = 1..=25");
    }

    #[test]
    fn empty_range_is_skipped() {
        let battery = Battery {
            classical_max_order: 0,
            ..Battery::default()
        };
        assert_eq!(validate(&battery).skipped_count(), 1);
    }
}
