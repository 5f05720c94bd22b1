//! Contract events emitted by ledger operations
//!
//! Events are immutable records appended to the bank's event log. Each
//! successful mutating operation emits exactly one event.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use types::ids::Address;
use uuid::Uuid;

/// A new user registered with the bank
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRegistered {
    pub address: Address,
    pub first_name: String,
    pub last_name: String,
}

/// A registered user deposited value into custody
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositReceived {
    pub address: Address,
    pub amount: u128,
    pub new_balance: u128,
}

/// A registered user withdrew value; the fee was accrued to the treasury
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawalExecuted {
    pub address: Address,
    /// Full amount debited from the user's balance
    pub amount: u128,
    pub fee_amount: u128,
    /// Value delivered to the user (`amount - fee_amount`)
    pub payout: u128,
}

/// The owner swept accrued fees out to the treasury address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreasuryWithdrawal {
    pub authorized_by: Address,
    pub recipient: Address,
    pub amount: u128,
}

/// Enum wrapper for all bank events, enabling uniform handling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BankEvent {
    UserRegistered(UserRegistered),
    DepositReceived(DepositReceived),
    WithdrawalExecuted(WithdrawalExecuted),
    TreasuryWithdrawal(TreasuryWithdrawal),
}

/// An emitted event plus its log envelope.
///
/// `event_id` is UUID v7, so records sort chronologically by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub event_id: Uuid,
    /// Emission time, unix milliseconds
    pub emitted_at: i64,
    pub event: BankEvent,
}

impl EventRecord {
    /// Wrap an event with a fresh id and the current timestamp
    pub fn new(event: BankEvent) -> Self {
        Self {
            event_id: Uuid::now_v7(),
            emitted_at: Utc::now().timestamp_millis(),
            event,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deposit_received_serialization() {
        let event = DepositReceived {
            address: Address::new("0xa11ce"),
            amount: 20_000_000_000_000_000, // 0.02 ether
            new_balance: 20_000_000_000_000_000,
        };
        let json = serde_json::to_string(&event).unwrap();
        let deser: DepositReceived = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deser);
    }

    #[test]
    fn test_withdrawal_executed_serialization() {
        let event = WithdrawalExecuted {
            address: Address::new("0xa11ce"),
            amount: 10_000,
            fee_amount: 100,
            payout: 9_900,
        };
        let json = serde_json::to_string(&event).unwrap();
        let deser: WithdrawalExecuted = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deser);
    }

    #[test]
    fn test_bank_event_enum_variant() {
        let event = BankEvent::UserRegistered(UserRegistered {
            address: Address::new("0xb0b"),
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
        });
        assert!(matches!(event, BankEvent::UserRegistered(_)));
    }

    #[test]
    fn test_event_records_get_unique_ids() {
        let make = |addr: &str| {
            EventRecord::new(BankEvent::UserRegistered(UserRegistered {
                address: Address::new(addr),
                first_name: "A".to_string(),
                last_name: "B".to_string(),
            }))
        };
        let first = make("0xa11ce");
        let second = make("0xb0b");
        assert_ne!(first.event_id, second.event_id);
        assert!(first.emitted_at <= second.emitted_at);
    }
}
