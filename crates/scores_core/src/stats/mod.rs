//! Descriptive statistics over score sequences.
//!
//! # Invariants
//! - Variance and standard deviation use population formulas.
//! - Empty input is rejected, never mapped to NaN.

pub mod calculator;
