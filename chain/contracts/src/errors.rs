//! Contract-specific error types
//!
//! Every variant is a precondition failure that aborts the whole operation
//! with no surviving state change.

use thiserror::Error;
use types::errors::TypeError;
use types::ids::Address;

/// Bank ledger errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BankError {
    #[error("Caller is already registered")]
    AlreadyRegistered,

    #[error("Caller is not registered")]
    NotRegistered,

    #[error("Insufficient balance: required {required}, available {available}")]
    InsufficientBalance { required: u128, available: u128 },

    #[error("Unauthorized: caller is not the owner")]
    Unauthorized,

    #[error("Insufficient treasury: required {required}, available {available}")]
    InsufficientTreasury { required: u128, available: u128 },

    #[error("Outbound transfer to {recipient} rejected")]
    TransferFailed { recipient: Address },

    #[error("Amount must be positive")]
    InvalidAmount,

    #[error("Arithmetic overflow in balance calculation")]
    Overflow,

    #[error("Type error: {0}")]
    Types(#[from] TypeError),
}
