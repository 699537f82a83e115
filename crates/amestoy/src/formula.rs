//! Closed-form magic constants.
//!
//! For a hypercube of order `n` and dimension `d` filled with the progression
//! `a, a + 1, …, a + n^d − 1`, every line parallel to an axis holds `n`
//! entries and the `n^(d−1)` parallel lines partition the whole progression.
//! Each line therefore sums to
//!
//! ```text
//! S(n, d, a) = n·a + n·(n^d − 1) / 2
//! ```
//!
//! [`amestoy_vazquez_constant`] evaluates this without checking its inputs.
//! [`FormulaParameters`] is the validated entry point.

use crate::error::FormulaError;
use crate::tolerance::{approx_eq, DEFAULT_TOLERANCE};

/// Magic constant `n·a + n·(n^d − 1)/2` of an order-`n`, `d`-dimensional
/// hypercube whose entries start at `a`.
///
/// Inputs are not validated: non-positive `n` or `d` yield a number with no
/// geometric meaning. Use [`FormulaParameters::new`] to reject them.
///
/// ```
/// use amestoy::amestoy_vazquez_constant;
///
/// assert_eq!(amestoy_vazquez_constant(3, 2, 1.0), 15.0);
/// assert_eq!(amestoy_vazquez_constant(3, 2, 100.0), 312.0);
/// assert_eq!(amestoy_vazquez_constant(5, 3, 500.5), 2812.5);
/// assert_eq!(amestoy_vazquez_constant(4, 2, 50.0), 230.0);
/// ```
#[must_use]
pub fn amestoy_vazquez_constant(n: i64, d: i32, a: f64) -> f64 {
    let n = n as f64;
    n * a + (n * (n.powi(d) - 1.0)) / 2.0
}

/// Classical magic constant `n·(n² + 1)/2` for squares filled with `1..=n²`.
///
/// ```
/// use amestoy::classical_magic_constant;
///
/// assert_eq!(classical_magic_constant(3), 15.0);
/// assert_eq!(classical_magic_constant(8), 260.0);
/// ```
#[must_use]
pub fn classical_magic_constant(n: i64) -> f64 {
    let n = n as f64;
    n * (n * n + 1.0) / 2.0
}

/// Returns true if the generalized formula at `d = 2, a = 1` agrees with
/// [`classical_magic_constant`] for order `n`.
#[must_use]
pub fn verify_classical_case(n: i64) -> bool {
    approx_eq(
        classical_magic_constant(n),
        amestoy_vazquez_constant(n, 2, 1.0),
        DEFAULT_TOLERANCE,
    )
}

/// Line sum obtained by dividing the total of the progression
/// `a, …, a + n^d − 1` evenly among its `n^(d−1)` parallel lines.
///
/// This is computed from the progression directly rather than from the
/// closed form, so it serves as an independent check for dimensions where
/// no hypercube is built. Returns NaN for `n = 0`.
///
/// ```
/// use amestoy::{amestoy_vazquez_constant, progression_line_sum};
///
/// assert_eq!(progression_line_sum(3, 3, 1.0), amestoy_vazquez_constant(3, 3, 1.0));
/// ```
#[must_use]
pub fn progression_line_sum(n: i64, d: i32, a: f64) -> f64 {
    let order = n as f64;
    let count = order.powi(d);
    let total = count * a + count * (count - 1.0) / 2.0;
    total / order.powi(d - 1)
}

/// Validated inputs to the generalized formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormulaParameters {
    order: i64,
    dimension: i32,
    start: f64,
}

impl FormulaParameters {
    /// Builds a parameter set, rejecting orders or dimensions below 1.
    ///
    /// # Errors
    ///
    /// Returns [`FormulaError::InvalidParameters`] if `order < 1` or
    /// `dimension < 1`.
    pub fn new(order: i64, dimension: i32, start: f64) -> Result<Self, FormulaError> {
        if order < 1 || dimension < 1 {
            return Err(FormulaError::InvalidParameters { order, dimension });
        }
        Ok(Self {
            order,
            dimension,
            start,
        })
    }

    /// Side length `n`.
    #[must_use]
    pub const fn order(&self) -> i64 {
        self.order
    }

    /// Dimension `d`.
    #[must_use]
    pub const fn dimension(&self) -> i32 {
        self.dimension
    }

    /// First value `a` of the progression.
    #[must_use]
    pub const fn start(&self) -> f64 {
        self.start
    }

    /// Evaluates `S(n, d, a)`.
    #[must_use]
    pub fn constant(&self) -> f64 {
        amestoy_vazquez_constant(self.order, self.dimension, self.start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documented_examples() {
        assert_eq!(amestoy_vazquez_constant(3, 2, 1.0), 15.0);
        assert_eq!(amestoy_vazquez_constant(3, 2, 100.0), 312.0);
        assert_eq!(amestoy_vazquez_constant(5, 3, 500.5), 2812.5);
        assert_eq!(amestoy_vazquez_constant(4, 2, 50.0), 230.0);
    }

    #[test]
    fn classical_reduction_small_orders() {
        for n in 1..=100 {
            assert!(verify_classical_case(n), "reduction fails at n = {n}");
        }
    }

    #[test]
    fn unvalidated_path_passes_through() {
        // n = 0 collapses to zero, d = 0 leaves only n·a
        assert_eq!(amestoy_vazquez_constant(0, 2, 7.0), 0.0);
        assert_eq!(amestoy_vazquez_constant(4, 0, 2.5), 10.0);
        assert_eq!(amestoy_vazquez_constant(-3, 2, 1.0), -15.0);
    }

    #[test]
    fn progression_agrees_with_closed_form() {
        for n in 1..=9 {
            for d in 1..=4 {
                for a in [1.0, -5.0, 0.0, 500.5] {
                    let closed = amestoy_vazquez_constant(n, d, a);
                    let direct = progression_line_sum(n, d, a);
                    assert!(
                        approx_eq(closed, direct, DEFAULT_TOLERANCE),
                        "S({n},{d},{a}): closed {closed}, direct {direct}"
                    );
                }
            }
        }
    }

    #[test]
    fn one_dimensional_line_is_the_whole_progression() {
        // a, a+1, …, a+n−1 sums to n·a + n(n−1)/2
        assert_eq!(amestoy_vazquez_constant(4, 1, 10.0), 46.0);
        assert_eq!(progression_line_sum(4, 1, 10.0), 46.0);
    }

    #[test]
    fn parameters_reject_non_positive_order() {
        let err = FormulaParameters::new(0, 2, 1.0).unwrap_err();
        assert_eq!(
            err,
            FormulaError::InvalidParameters {
                order: 0,
                dimension: 2
            }
        );
    }

    #[test]
    fn parameters_reject_non_positive_dimension() {
        assert!(FormulaParameters::new(3, 0, 1.0).is_err());
        assert!(FormulaParameters::new(3, -1, 1.0).is_err());
    }

    #[test]
    fn parameters_evaluate_constant() {
        let params = FormulaParameters::new(5, 3, 500.5).unwrap();
        assert_eq!(params.order(), 5);
        assert_eq!(params.dimension(), 3);
        assert_eq!(params.start(), 500.5);
        assert_eq!(params.constant(), 2812.5);
    }
}
