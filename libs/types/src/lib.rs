//! Types library for the SimpleBank custodial ledger
//!
//! This library provides all core type definitions used across the bank system,
//! ensuring type safety, deterministic behavior, and backward compatibility.
//!
//! # Version
//! v1.0.0 - Frozen type surface
//!
//! # Modules
//! - `ids`: Caller identity (`Address`)
//! - `account`: Account state and balance bookkeeping
//! - `fee`: Withdrawal fee in basis points
//! - `errors`: Type-level error taxonomy

// Public modules
pub mod ids;
pub mod account;
pub mod fee;
pub mod errors;

// Library version constant
pub const LIB_VERSION: &str = "1.0.0";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::ids::*;
    pub use crate::account::*;
    pub use crate::fee::*;
    pub use crate::errors::*;
}
