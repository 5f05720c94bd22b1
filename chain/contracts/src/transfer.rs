//! Outbound value-transfer seam
//!
//! The ledger never moves value itself; it asks a [`TransferOutlet`] to
//! deliver a payout to a recipient. The outlet stands in for the hosting
//! execution environment's native send, which may hand control to the
//! recipient — including a recipient that calls back into the bank. The
//! bank's operations therefore mutate all state before calling `deliver`.

use std::collections::HashMap;

use crate::bank::SimpleBank;
use crate::errors::BankError;
use types::ids::Address;

/// Delivery of value out of the bank's custody.
///
/// `deliver` receives the bank by `&mut` so a recipient callback can legally
/// re-enter the contract; any nested call observes already-committed state.
/// Returning an error rejects the delivery, and the calling operation rolls
/// back its own state changes.
pub trait TransferOutlet {
    fn deliver(
        &mut self,
        bank: &mut SimpleBank,
        to: &Address,
        amount: u128,
    ) -> Result<(), BankError>;
}

/// In-memory settlement ledger tracking value held by external addresses.
///
/// Accepts every delivery and credits the recipient. Used by the simulation
/// driver and the test suites as the host-environment ledger.
#[derive(Debug, Default)]
pub struct SettlementLedger {
    held: HashMap<Address, u128>,
    total_delivered: u128,
}

impl SettlementLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value held by an address outside the bank
    pub fn held_by(&self, address: &Address) -> u128 {
        self.held.get(address).copied().unwrap_or(0)
    }

    /// Total value ever delivered out of the bank
    pub fn total_delivered(&self) -> u128 {
        self.total_delivered
    }
}

impl TransferOutlet for SettlementLedger {
    fn deliver(
        &mut self,
        _bank: &mut SimpleBank,
        to: &Address,
        amount: u128,
    ) -> Result<(), BankError> {
        *self.held.entry(to.clone()).or_insert(0) += amount;
        self.total_delivered += amount;
        Ok(())
    }
}

/// Outlet that rejects every delivery, for exercising rollback paths.
#[derive(Debug, Default)]
pub struct RejectingOutlet;

impl TransferOutlet for RejectingOutlet {
    fn deliver(
        &mut self,
        _bank: &mut SimpleBank,
        to: &Address,
        _amount: u128,
    ) -> Result<(), BankError> {
        Err(BankError::TransferFailed {
            recipient: to.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::fee::FeeBps;

    fn bank() -> SimpleBank {
        SimpleBank::new(
            Address::new("0x0123"),
            FeeBps::try_new(100).unwrap(),
            Address::new("0xfee5"),
        )
    }

    #[test]
    fn test_settlement_ledger_credits_recipient() {
        let mut bank = bank();
        let mut ledger = SettlementLedger::new();
        let bob = Address::new("0xb0b");

        ledger.deliver(&mut bank, &bob, 500).unwrap();
        ledger.deliver(&mut bank, &bob, 250).unwrap();

        assert_eq!(ledger.held_by(&bob), 750);
        assert_eq!(ledger.total_delivered(), 750);
    }

    #[test]
    fn test_settlement_ledger_unknown_address() {
        let ledger = SettlementLedger::new();
        assert_eq!(ledger.held_by(&Address::new("0xdead")), 0);
    }

    #[test]
    fn test_rejecting_outlet() {
        let mut bank = bank();
        let bob = Address::new("0xb0b");
        let result = RejectingOutlet.deliver(&mut bank, &bob, 1);
        assert_eq!(result, Err(BankError::TransferFailed { recipient: bob }));
    }
}
