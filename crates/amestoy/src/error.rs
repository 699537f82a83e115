//! Error types for formula evaluation and square construction.

use thiserror::Error;

/// Rejected input to the validated formula path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormulaError {
    /// Order or dimension below 1.
    #[error("invalid parameters: order {order} and dimension {dimension} must both be at least 1")]
    InvalidParameters {
        /// Requested side length.
        order: i64,
        /// Requested dimension.
        dimension: i32,
    },
}

/// Failure to construct a magic square.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SquareError {
    /// The Siamese method is only defined for odd orders.
    #[error("unsupported order {order}: the Siamese method requires an odd order")]
    UnsupportedOrder {
        /// Requested side length.
        order: usize,
    },
    /// `order²` cells do not fit in addressable memory.
    #[error("order {order} is too large: {order}² cells cannot be allocated")]
    TooLarge {
        /// Requested side length.
        order: usize,
    },
}
