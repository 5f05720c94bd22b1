//! Caller identity for the bank ledger
//!
//! Every operation on the ledger is keyed by the caller's address. The
//! address is an opaque, externally-issued identity; the ledger never
//! derives or verifies it, it only uses it as a map key.

use crate::errors::TypeError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// External identity of a caller (an account address).
///
/// Format: `0x`-prefixed lowercase hex string. Addresses are normalized to
/// lowercase on construction so that map lookups are case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    /// Create a new Address from a string
    ///
    /// # Panics
    /// Panics if the format is invalid (must be `0x` followed by hex digits)
    pub fn new(addr: impl Into<String>) -> Self {
        Self::try_new(addr).expect("Address must be 0x-prefixed hex")
    }

    /// Try to create an Address, returning an error if invalid
    pub fn try_new(addr: impl Into<String>) -> Result<Self, TypeError> {
        let s: String = addr.into();
        let hex = s.strip_prefix("0x").ok_or_else(|| TypeError::InvalidAddress {
            input: s.clone(),
        })?;
        if hex.is_empty() || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(TypeError::InvalidAddress { input: s });
        }
        Ok(Self(s.to_ascii_lowercase()))
    }

    /// Get the address string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Address {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
