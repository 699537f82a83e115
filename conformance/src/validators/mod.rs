//! Validators, one per property of the formula.

pub mod classical;
pub mod formula;
pub mod progression;
pub mod square;
