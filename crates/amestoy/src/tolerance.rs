//! Floating-point comparison policy.
//!
//! One rule is used everywhere a predicted constant meets a computed one:
//! the difference must be within `tol` scaled by the larger magnitude,
//! never less than `tol` itself. Near zero this is an absolute bound, for
//! large constants it is relative.

/// Tolerance used when a caller does not supply one.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Returns true if `a` and `b` agree within `tol`.
///
/// ```
/// use amestoy::approx_eq;
///
/// assert!(approx_eq(15.0, 15.0 + 1e-12, 1e-10));
/// assert!(approx_eq(1.0e12, 1.0e12 + 1.0, 1e-10));
/// assert!(!approx_eq(15.0, 15.001, 1e-10));
/// ```
#[must_use]
pub fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
    if a == b {
        return true;
    }
    if !a.is_finite() || !b.is_finite() {
        return false;
    }
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= tol * scale
}
