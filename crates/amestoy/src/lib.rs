//! Amestoy-Vázquez magic constant
//!
//! A closed-form generalization of the magic-square constant to
//! n-dimensional hypercubes whose entries are the arithmetic progression
//! `a, a + 1, …, a + n^d − 1`:
//!
//! ```text
//! S(n, d, a) = n·a + n·(n^d − 1) / 2
//! ```
//!
//! The classical constant `n·(n² + 1) / 2` is the special case `d = 2, a = 1`.
//!
//! # Ground Truth
//!
//! The formula is checked against squares built by the Siamese
//! (De la Loubère) method, which places a contiguous progression into any
//! odd-order grid so that every row, column and main diagonal shares one sum.
//!
//! | Order | Start | S(n, 2, a) |
//! |-------|-------|------------|
//! | 3 | 1 | 15 |
//! | 3 | 100 | 312 |
//! | 5 | 500.5 | 2562.5 |
//! | 9 | 1000 | 9360 |
//!
//! # Example: Formula
//!
//! ```
//! use amestoy::{amestoy_vazquez_constant, classical_magic_constant};
//!
//! assert_eq!(amestoy_vazquez_constant(3, 2, 1.0), 15.0);
//! assert_eq!(amestoy_vazquez_constant(5, 3, 500.5), 2812.5);
//! assert_eq!(classical_magic_constant(4), 34.0);
//! ```
//!
//! # Example: Construction
//!
//! ```
//! use amestoy::{amestoy_vazquez_constant, approx_eq, MagicSquare, DEFAULT_TOLERANCE};
//!
//! let square = MagicSquare::siamese(5, -5.0).unwrap();
//! assert!(square.is_magic(DEFAULT_TOLERANCE));
//! assert!(approx_eq(
//!     square.magic_constant(),
//!     amestoy_vazquez_constant(5, 2, -5.0),
//!     DEFAULT_TOLERANCE,
//! ));
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod error;
pub mod formula;
pub mod square;
pub mod tolerance;

pub use error::{FormulaError, SquareError};
pub use formula::{
    amestoy_vazquez_constant, classical_magic_constant, progression_line_sum,
    verify_classical_case, FormulaParameters,
};
pub use square::{LineSums, MagicSquare};
pub use tolerance::{approx_eq, DEFAULT_TOLERANCE};
