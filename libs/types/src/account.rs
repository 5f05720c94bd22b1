//! Account state and balance bookkeeping
//!
//! Each caller address owns at most one account, created on first
//! registration and never deleted. Balances are held in the smallest
//! currency unit (wei scale), so all arithmetic is pure integer math.

use serde::{Deserialize, Serialize};

/// A single user account in the ledger.
///
/// Invariants:
/// - `registered` only ever transitions `false -> true`
/// - `balance` never goes negative (debits are pre-checked)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub registered: bool,
    pub first_name: String,
    pub last_name: String,
    /// Balance in the smallest currency unit
    pub balance: u128,
}

impl Account {
    /// Create a freshly registered account with a zero balance
    pub fn register(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            registered: true,
            first_name: first_name.into(),
            last_name: last_name.into(),
            balance: 0,
        }
    }

    /// Credit the balance, returning `None` on arithmetic overflow
    #[must_use]
    pub fn checked_credit(&mut self, amount: u128) -> Option<u128> {
        let new_balance = self.balance.checked_add(amount)?;
        self.balance = new_balance;
        Some(new_balance)
    }

    /// Debit the balance, returning `None` if `amount` exceeds the balance
    #[must_use]
    pub fn checked_debit(&mut self, amount: u128) -> Option<u128> {
        let new_balance = self.balance.checked_sub(amount)?;
        self.balance = new_balance;
        Some(new_balance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_starts_at_zero() {
        let account = Account::register("John", "Doe");
        assert!(account.registered);
        assert_eq!(account.first_name, "John");
        assert_eq!(account.last_name, "Doe");
        assert_eq!(account.balance, 0);
    }

    #[test]
    fn test_checked_credit() {
        let mut account = Account::register("John", "Doe");
        assert_eq!(account.checked_credit(100), Some(100));
        assert_eq!(account.checked_credit(50), Some(150));
        assert_eq!(account.balance, 150);
    }

    #[test]
    fn test_checked_credit_overflow() {
        let mut account = Account::register("John", "Doe");
        account.balance = u128::MAX;
        assert_eq!(account.checked_credit(1), None);
        assert_eq!(account.balance, u128::MAX, "Balance unchanged on overflow");
    }

    #[test]
    fn test_checked_debit() {
        let mut account = Account::register("John", "Doe");
        account.balance = 100;
        assert_eq!(account.checked_debit(30), Some(70));
        assert_eq!(account.balance, 70);
    }

    #[test]
    fn test_checked_debit_insufficient() {
        let mut account = Account::register("John", "Doe");
        account.balance = 10;
        assert_eq!(account.checked_debit(11), None);
        assert_eq!(account.balance, 10, "Balance unchanged on failed debit");
    }

    #[test]
    fn test_account_serialization() {
        let account = Account::register("Jane", "Roe");
        let json = serde_json::to_string(&account).unwrap();
        let deserialized: Account = serde_json::from_str(&json).unwrap();
        assert_eq!(account, deserialized);
    }
}
