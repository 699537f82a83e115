//! Property-based tests for Siamese-method construction.
//!
//! Every odd order and start value must yield a square whose lines all share
//! the constant predicted by `S(n, 2, a)`.

use amestoy::{
    amestoy_vazquez_constant, approx_eq, MagicSquare, SquareError, DEFAULT_TOLERANCE,
};
use proptest::prelude::*;

fn odd_order() -> impl Strategy<Value = usize> {
    (0usize..10).prop_map(|k| 2 * k + 1)
}

fn even_order() -> impl Strategy<Value = usize> {
    (0usize..10).prop_map(|k| 2 * k)
}

proptest! {
    /// Every row, column and diagonal sums to the first-row constant.
    #[test]
    fn prop_all_lines_agree(n in odd_order(), start in -1.0e4f64..1.0e4) {
        let square = MagicSquare::siamese(n, start).unwrap();
        let off = square
            .line_sums()
            .off_by(square.magic_constant(), DEFAULT_TOLERANCE);
        prop_assert!(off.is_empty(), "n={} start={} off={:?}", n, start, off);
    }

    /// The realized constant matches the closed form at d = 2.
    #[test]
    fn prop_formula_matches_construction(n in odd_order(), start in -1.0e4f64..1.0e4) {
        let square = MagicSquare::siamese(n, start).unwrap();
        let predicted = amestoy_vazquez_constant(n as i64, 2, start);
        prop_assert!(
            approx_eq(square.magic_constant(), predicted, DEFAULT_TOLERANCE),
            "n={} start={} actual={} predicted={}",
            n, start, square.magic_constant(), predicted
        );
    }

    /// Entries are exactly start, start+1, …, start+n²−1.
    #[test]
    fn prop_entries_are_the_progression(n in odd_order(), start in -100i32..100) {
        let start = f64::from(start);
        let square = MagicSquare::siamese(n, start).unwrap();
        let mut values: Vec<f64> = square.rows().flatten().copied().collect();
        values.sort_by(f64::total_cmp);
        let expected: Vec<f64> = (0..n * n).map(|k| start + k as f64).collect();
        prop_assert_eq!(values, expected);
    }

    /// Even orders never produce a square.
    #[test]
    fn prop_even_orders_rejected(n in even_order(), start in -1.0e4f64..1.0e4) {
        prop_assert_eq!(
            MagicSquare::siamese(n, start),
            Err(SquareError::UnsupportedOrder { order: n })
        );
    }

    /// Two constructions with the same inputs are identical.
    #[test]
    fn prop_deterministic(n in odd_order(), start in -1.0e4f64..1.0e4) {
        prop_assert_eq!(
            MagicSquare::siamese(n, start).unwrap(),
            MagicSquare::siamese(n, start).unwrap()
        );
    }
}
