//! Smart Contract Logic for the SimpleBank Custodial Ledger
//!
//! This crate implements the contract layer of the bank: user registration,
//! custodial balance tracking, fee-deducting withdrawals, and treasury
//! accrual/withdrawal.
//!
//! # Modules
//! - `events`: Contract events emitted by ledger operations
//! - `errors`: Contract-specific error types
//! - `bank`: The ledger state machine and its five public operations
//! - `transfer`: Outbound value-transfer seam and in-memory settlement ledger
//!
//! # Version
//! v0.1.0 — Initial implementation

pub mod errors;
pub mod events;
pub mod bank;
pub mod transfer;

/// Contract ABI version — frozen after release
pub const CONTRACT_ABI_VERSION: &str = "1.0.0";
