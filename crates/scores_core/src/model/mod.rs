//! Domain records for exam scores and academic debts.
//!
//! # Responsibility
//! - Define the row shapes shared by the Score Store and the Debt Store.
//! - Validate caller-provided rows before they reach SQL.
//!
//! # Invariants
//! - A debt row is unique per `(name, discipline)`.
//! - Scores are non-negative by construction (`u32`).

pub mod score;
