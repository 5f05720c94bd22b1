//! Type-level error taxonomy
//!
//! Validation errors raised while constructing domain types.

use thiserror::Error;

/// Errors from domain type construction and validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypeError {
    #[error("Invalid address: {input}")]
    InvalidAddress { input: String },

    #[error("Fee out of range: {bps} bps exceeds 10000")]
    FeeOutOfRange { bps: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_address_display() {
        let err = TypeError::InvalidAddress {
            input: "not-an-address".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid address: not-an-address");
    }

    #[test]
    fn test_fee_out_of_range_display() {
        let err = TypeError::FeeOutOfRange { bps: 10_001 };
        assert!(err.to_string().contains("10001"));
    }
}
