//! Verification report types: results, severity levels, and report aggregation.

use amestoy::approx_eq;
use serde::Serialize;

/// Severity level of a verification check result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The check passed.
    Pass,
    /// The check does not apply to its inputs (e.g. an even order).
    Skipped,
    /// The check failed.
    Failure,
}

/// Predicted against realized constant for one case.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VerificationResult {
    /// Value from the closed-form formula.
    pub predicted: f64,
    /// Value obtained independently (construction or stated expectation).
    pub actual: f64,
    /// `|actual − predicted|`.
    pub error: f64,
    /// Whether the two agree within the tolerance used.
    pub matched: bool,
}

impl VerificationResult {
    /// Compares `predicted` with `actual` under the workspace tolerance policy.
    #[must_use]
    pub fn compare(predicted: f64, actual: f64, tolerance: f64) -> Self {
        Self {
            predicted,
            actual,
            error: (actual - predicted).abs(),
            matched: approx_eq(actual, predicted, tolerance),
        }
    }
}

/// A single verification check result.
#[derive(Debug, Clone, Serialize)]
pub struct TestResult {
    /// Short identifier of the validator that produced this result.
    pub validator: String,
    /// Human-readable message describing the outcome.
    pub message: String,
    /// Severity of the result.
    pub severity: Severity,
    /// Optional additional detail lines.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
    /// Numeric comparison behind the result, when there is one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification: Option<VerificationResult>,
}

impl TestResult {
    fn new(validator: impl Into<String>, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            validator: validator.into(),
            message: message.into(),
            severity,
            details: Vec::new(),
            verification: None,
        }
    }

    /// Creates a passing result.
    pub fn pass(validator: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(validator, message, Severity::Pass)
    }

    /// Creates a failure result.
    pub fn fail(validator: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(validator, message, Severity::Failure)
    }

    /// Creates a failure result with additional detail lines.
    pub fn fail_with_details(
        validator: impl Into<String>,
        message: impl Into<String>,
        details: Vec<String>,
    ) -> Self {
        Self::new(validator, message, Severity::Failure).with_details(details)
    }

    /// Creates a not-applicable result.
    pub fn skip(validator: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(validator, message, Severity::Skipped)
    }

    /// Creates a pass or failure from a numeric comparison.
    pub fn from_verification(
        validator: impl Into<String>,
        message: impl Into<String>,
        verification: VerificationResult,
    ) -> Self {
        let severity = if verification.matched {
            Severity::Pass
        } else {
            Severity::Failure
        };
        let mut result = Self::new(validator, message, severity);
        result.verification = Some(verification);
        result
    }

    /// Appends detail lines.
    #[must_use]
    pub fn with_details(mut self, details: Vec<String>) -> Self {
        self.details.extend(details);
        self
    }

    /// Returns true if this result represents a failure.
    pub fn is_failure(&self) -> bool {
        self.severity == Severity::Failure
    }
}

/// Aggregated report from all validators.
#[derive(Debug, Serialize)]
pub struct ConformanceReport {
    /// All individual test results across all validators.
    pub results: Vec<TestResult>,
}

impl ConformanceReport {
    /// Creates a new empty report.
    pub fn new() -> Self {
        Self {
            results: Vec::new(),
        }
    }

    /// Appends a result to this report.
    pub fn push(&mut self, result: TestResult) {
        self.results.push(result);
    }

    /// Extends this report with results from another report.
    pub fn extend(&mut self, other: ConformanceReport) {
        self.results.extend(other.results);
    }

    fn count(&self, severity: Severity) -> usize {
        self.results.iter().filter(|r| r.severity == severity).count()
    }

    /// Returns the count of passed checks.
    pub fn pass_count(&self) -> usize {
        self.count(Severity::Pass)
    }

    /// Returns the count of checks that did not apply.
    pub fn skipped_count(&self) -> usize {
        self.count(Severity::Skipped)
    }

    /// Returns the count of failed checks.
    pub fn failure_count(&self) -> usize {
        self.count(Severity::Failure)
    }

    /// Returns true if all checks passed (no failures).
    pub fn all_passed(&self) -> bool {
        self.failure_count() == 0
    }
}

impl Default for ConformanceReport {
    fn default() -> Self {
        Self::new()
    }
}
