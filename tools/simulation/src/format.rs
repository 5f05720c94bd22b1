//! Wei → ether display conversion
//!
//! Ledger amounts are integer wei; logs and reports want ether. Conversion
//! uses fixed-point decimal arithmetic, never floats.

use rust_decimal::Decimal;

/// Decimal places between wei and ether
const ETHER_SCALE: u32 = 18;

/// Convert a wei amount to an ether decimal.
///
/// Returns `None` when the amount exceeds the 96-bit decimal mantissa
/// (around 79 billion ether), in which case callers fall back to raw wei.
pub fn wei_to_eth(wei: u128) -> Option<Decimal> {
    i128::try_from(wei)
        .ok()
        .and_then(|w| Decimal::try_from_i128_with_scale(w, ETHER_SCALE).ok())
        .map(|d| d.normalize())
}

/// Human-readable amount: ether when representable, raw wei otherwise
pub fn format_amount(wei: u128) -> String {
    match wei_to_eth(wei) {
        Some(eth) => format!("{} ETH", eth),
        None => format!("{} wei", wei),
    }
}
