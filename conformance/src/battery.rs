//! The case battery: which squares are built, which formula values are
//! checked, and the tolerance every comparison uses.
//!
//! A battery may be read from TOML. Omitted keys keep their defaults.
//!
//! ```toml
//! tolerance = 1e-10
//! classical_max_order = 25
//! progression_max_dimension = 4
//!
//! [[square]]
//! order = 3
//! start = 1
//!
//! [[formula]]
//! order = 5
//! dimension = 3
//! start = 500.5
//! expected = 2812.5
//! ```

use std::path::Path;

use amestoy::DEFAULT_TOLERANCE;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// A square to build and compare against `S(n, 2, start)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SquareCase {
    /// Side length.
    pub order: usize,
    /// First value of the progression.
    pub start: f64,
}

/// A formula evaluation with a known answer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormulaCase {
    /// Side length.
    pub order: i64,
    /// Dimension.
    pub dimension: i32,
    /// First value of the progression.
    pub start: f64,
    /// Expected constant.
    pub expected: f64,
}

/// Full verification configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Battery {
    /// Comparison tolerance, see [`amestoy::approx_eq`].
    pub tolerance: f64,
    /// Squares checked by construction.
    #[serde(rename = "square")]
    pub squares: Vec<SquareCase>,
    /// Formula values checked against stated expectations.
    #[serde(rename = "formula")]
    pub formulas: Vec<FormulaCase>,
    /// The reduction to the classical constant is checked for `1..=` this.
    pub classical_max_order: i64,
    /// Square cases are cross-checked against the progression for
    /// dimensions `1..=` this.
    pub progression_max_dimension: i32,
}

impl Default for Battery {
    fn default() -> Self {
        let square = |order, start| SquareCase { order, start };
        let formula = |order, dimension, start, expected| FormulaCase {
            order,
            dimension,
            start,
            expected,
        };
        Self {
            tolerance: DEFAULT_TOLERANCE,
            squares: vec![
                square(3, 1.0), // classical
                square(3, 100.0),
                square(3, -5.0),
                square(5, 500.5),
                square(7, 0.0),
                square(9, 1000.0),
            ],
            formulas: vec![
                formula(3, 2, 1.0, 15.0),
                formula(3, 2, 100.0, 312.0),
                formula(5, 3, 500.5, 2812.5),
                formula(4, 2, 50.0, 230.0),
            ],
            classical_max_order: 25,
            progression_max_dimension: 4,
        }
    }
}

impl Battery {
    /// Parses a battery from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML, names unknown keys,
    /// or describes an unusable battery (see [`Battery::check`]).
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let battery: Self = toml::from_str(text).context("Failed to parse case battery")?;
        battery.check()?;
        Ok(battery)
    }

    /// Reads a battery from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("Invalid battery {}", path.display()))
    }

    /// Returns a copy with a different tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Rejects configurations no comparison could be run under.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is not a positive finite number.
    pub fn check(&self) -> Result<()> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            bail!(
                "tolerance must be a positive finite number, got {}",
                self.tolerance
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_battery_matches_reference_cases() {
        let battery = Battery::default();
        let squares: Vec<(usize, f64)> = battery.squares.iter().map(|c| (c.order, c.start)).collect();
        assert_eq!(
            squares,
            vec![(3, 1.0), (3, 100.0), (3, -5.0), (5, 500.5), (7, 0.0), (9, 1000.0)]
        );
        assert_eq!(battery.formulas.len(), 4);
        assert_eq!(battery.tolerance, DEFAULT_TOLERANCE);
    }

    #[test]
    fn toml_overrides_selected_fields() {
        let battery = Battery::from_toml_str(
            r#"
            tolerance = 1e-4

            [[square]]
            order = 11
            start = -3
            "#,
        )
        .unwrap();
        assert_eq!(battery.tolerance, 1e-4);
        assert_eq!(battery.squares, vec![SquareCase { order: 11, start: -3.0 }]);
        // untouched keys fall back to the defaults
        assert_eq!(battery.formulas, Battery::default().formulas);
        assert_eq!(battery.classical_max_order, 25);
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(Battery::from_toml_str("").unwrap(), Battery::default());
    }

    #[test]
    fn unknown_keys_rejected() {
        assert!(Battery::from_toml_str("tolerence = 1e-4").is_err());
        assert!(Battery::from_toml_str("[[square]]\norder = 3\nstart = 1\nsize = 2").is_err());
    }

    #[test]
    fn non_positive_tolerance_rejected() {
        assert!(Battery::from_toml_str("tolerance = 0.0").is_err());
        assert!(Battery::from_toml_str("tolerance = -1e-4").is_err());
        assert!(Battery::default().with_tolerance(f64::NAN).check().is_err());
    }

    #[test]
    fn missing_file_names_path() {
        let err = Battery::load(Path::new("/nonexistent/cases.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/cases.toml"));
    }
}
