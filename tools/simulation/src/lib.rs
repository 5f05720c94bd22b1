//! Interaction & Scenario Testing for the SimpleBank Ledger
//!
//! Drives the bank contract in-process: deterministic randomized operation
//! sequences with per-step conservation checking, plus display helpers for
//! human-readable amounts.
//!
//! # Modules
//! - `scenario` — Seeded random register/deposit/withdraw/sweep sequences
//! - `format` — Wei → ether display conversion

pub mod scenario;
pub mod format;

/// Crate version constant
pub const VERSION: &str = "1.0.0";
