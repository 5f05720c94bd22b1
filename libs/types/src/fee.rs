//! Withdrawal fee in basis points
//!
//! The fee rate is fixed at ledger construction and applied to every user
//! withdrawal. All fee arithmetic is integer floor division over the fixed
//! basis-point denominator; nothing is ever rounded up.

use crate::errors::TypeError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Basis-point denominator: 1 bp = 0.01%
pub const BPS_DENOMINATOR: u128 = 10_000;

/// Withdrawal fee rate in basis points, validated to `[0, 10000]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeeBps(u32);

impl FeeBps {
    /// Zero fee
    pub const ZERO: FeeBps = FeeBps(0);

    /// Try to create a fee rate, rejecting values above 10000 bps (100%)
    pub fn try_new(bps: u32) -> Result<Self, TypeError> {
        if bps as u128 > BPS_DENOMINATOR {
            return Err(TypeError::FeeOutOfRange { bps });
        }
        Ok(Self(bps))
    }

    /// Get the raw basis-point value
    pub fn bps(&self) -> u32 {
        self.0
    }

    /// Fee charged on `amount`: `floor(amount * bps / 10000)`.
    ///
    /// Computed as quotient and remainder parts so the intermediate product
    /// cannot overflow `u128` for any amount. Since `bps <= 10000`, the fee
    /// never exceeds `amount`.
    pub fn fee_on(&self, amount: u128) -> u128 {
        let bps = self.0 as u128;
        (amount / BPS_DENOMINATOR) * bps + (amount % BPS_DENOMINATOR) * bps / BPS_DENOMINATOR
    }

    /// Amount remaining after the fee is deducted
    pub fn payout_on(&self, amount: u128) -> u128 {
        amount - self.fee_on(amount)
    }
}

impl fmt::Display for FeeBps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bps", self.0)
    }
}
