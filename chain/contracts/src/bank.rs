//! SimpleBank — registration, custodial balances, fee-deducting withdrawals,
//! treasury accrual and sweep
//!
//! The ledger is a single atomic state machine: every public operation is one
//! indivisible transition. The only external hand-off is the outbound value
//! transfer at the end of the withdrawal paths, and both paths commit all
//! state before that hand-off so a re-entering recipient sees final balances.

use std::collections::HashMap;

use crate::errors::BankError;
use crate::events::{
    BankEvent, DepositReceived, EventRecord, TreasuryWithdrawal, UserRegistered,
    WithdrawalExecuted,
};
use crate::transfer::TransferOutlet;
use types::account::Account;
use types::fee::FeeBps;
use types::ids::Address;

/// The bank's contract state.
///
/// `owner`, `treasury`, and `fee` are fixed at construction; no setters
/// exist. Accounts are created lazily on first registration and never
/// deleted.
#[derive(Debug)]
pub struct SimpleBank {
    /// Sole authority for treasury withdrawals, fixed at construction
    owner: Address,
    /// Destination for swept fees, fixed at construction
    treasury: Address,
    /// Withdrawal fee rate, fixed at construction
    fee: FeeBps,
    /// Fees accrued from withdrawals, not yet swept
    treasury_balance: u128,
    /// Accounts keyed by caller address
    accounts: HashMap<Address, Account>,
    /// Emitted events log (append-only)
    events: Vec<EventRecord>,
}

impl SimpleBank {
    /// Create a new bank. The deploying caller becomes the immutable owner.
    pub fn new(owner: Address, fee: FeeBps, treasury: Address) -> Self {
        Self {
            owner,
            treasury,
            fee,
            treasury_balance: 0,
            accounts: HashMap::new(),
            events: Vec::new(),
        }
    }

    // ───────────────────────── Registration ─────────────────────────

    /// Register the caller with the bank.
    ///
    /// Creates the caller's account with a zero balance. Registration is
    /// one-way: a second call for the same address fails and nothing else
    /// ever clears the flag.
    pub fn register(
        &mut self,
        caller: &Address,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Result<EventRecord, BankError> {
        if self.accounts.get(caller).is_some_and(|a| a.registered) {
            return Err(BankError::AlreadyRegistered);
        }

        let account = Account::register(first_name, last_name);
        let event = BankEvent::UserRegistered(UserRegistered {
            address: caller.clone(),
            first_name: account.first_name.clone(),
            last_name: account.last_name.clone(),
        });
        self.accounts.insert(caller.clone(), account);

        Ok(self.emit(event))
    }

    // ───────────────────────── Deposit ─────────────────────────

    /// Deposit attached value into the caller's custodial balance.
    ///
    /// `amount` is the value already custodied by the host environment for
    /// this call; on failure the host returns it to the caller, so no
    /// partial acceptance is possible.
    pub fn deposit(&mut self, caller: &Address, amount: u128) -> Result<EventRecord, BankError> {
        if amount == 0 {
            return Err(BankError::InvalidAmount);
        }

        let account = self
            .accounts
            .get_mut(caller)
            .filter(|a| a.registered)
            .ok_or(BankError::NotRegistered)?;

        let new_balance = account.checked_credit(amount).ok_or(BankError::Overflow)?;

        Ok(self.emit(BankEvent::DepositReceived(DepositReceived {
            address: caller.clone(),
            amount,
            new_balance,
        })))
    }

    // ───────────────────────── Withdraw ─────────────────────────

    /// Withdraw `amount` from the caller's balance, delivering the amount
    /// minus the fee and accruing the fee to the treasury.
    ///
    /// Ordered effect: the full `amount` is debited and the fee accrued
    /// before `outlet.deliver` runs, so a recipient that re-enters the bank
    /// observes the debited balance. A rejected delivery reverts the ledger
    /// to its pre-call snapshot — a rejecting recipient reverts its own
    /// frame, so nothing it committed through nested calls survives either.
    /// A zero withdrawal is a legal no-op delivery.
    pub fn withdraw(
        &mut self,
        caller: &Address,
        amount: u128,
        outlet: &mut dyn TransferOutlet,
    ) -> Result<EventRecord, BankError> {
        let available = self
            .accounts
            .get(caller)
            .filter(|a| a.registered)
            .map(|a| a.balance)
            .ok_or(BankError::NotRegistered)?;
        if amount > available {
            return Err(BankError::InsufficientBalance {
                required: amount,
                available,
            });
        }

        let fee_amount = self.fee.fee_on(amount);
        let payout = amount - fee_amount;
        let snapshot = self.snapshot();

        // Effects: debit the full amount and accrue the fee, then interact.
        if let Some(account) = self.accounts.get_mut(caller) {
            account.balance -= amount;
        }
        self.treasury_balance += fee_amount;

        let recipient = caller.clone();
        if outlet.deliver(self, &recipient, payout).is_err() {
            self.restore(snapshot);
            return Err(BankError::TransferFailed { recipient });
        }

        Ok(self.emit(BankEvent::WithdrawalExecuted(WithdrawalExecuted {
            address: recipient,
            amount,
            fee_amount,
            payout,
        })))
    }

    // ───────────────────────── Treasury ─────────────────────────

    /// Sweep `amount` of accrued fees to the treasury address. Owner-only.
    ///
    /// The caller merely authorizes; the payout destination is always the
    /// fixed treasury address. Same commit-before-deliver ordering and
    /// snapshot revert as `withdraw`.
    pub fn withdraw_treasury(
        &mut self,
        caller: &Address,
        amount: u128,
        outlet: &mut dyn TransferOutlet,
    ) -> Result<EventRecord, BankError> {
        if *caller != self.owner {
            return Err(BankError::Unauthorized);
        }
        if amount > self.treasury_balance {
            return Err(BankError::InsufficientTreasury {
                required: amount,
                available: self.treasury_balance,
            });
        }

        let snapshot = self.snapshot();
        self.treasury_balance -= amount;

        let recipient = self.treasury.clone();
        if outlet.deliver(self, &recipient, amount).is_err() {
            self.restore(snapshot);
            return Err(BankError::TransferFailed { recipient });
        }

        Ok(self.emit(BankEvent::TreasuryWithdrawal(TreasuryWithdrawal {
            authorized_by: caller.clone(),
            recipient,
            amount,
        })))
    }

    // ───────────────────────── Read-only queries ─────────────────────────

    /// Balance of the caller's own account. Zero for unknown identities.
    pub fn balance_of(&self, caller: &Address) -> u128 {
        self.accounts.get(caller).map_or(0, |a| a.balance)
    }

    /// Accrued fees not yet swept to the treasury
    pub fn treasury_balance(&self) -> u128 {
        self.treasury_balance
    }

    /// The caller's account record, if one exists (the public users mapping)
    pub fn account(&self, caller: &Address) -> Option<&Account> {
        self.accounts.get(caller)
    }

    /// Whether an address has completed registration
    pub fn is_registered(&self, caller: &Address) -> bool {
        self.accounts.get(caller).is_some_and(|a| a.registered)
    }

    /// The immutable owner identity
    pub fn owner(&self) -> &Address {
        &self.owner
    }

    /// The fixed treasury address
    pub fn treasury(&self) -> &Address {
        &self.treasury
    }

    /// The fixed withdrawal fee rate
    pub fn fee(&self) -> FeeBps {
        self.fee
    }

    /// Total value the bank must be holding: Σ account balances + treasury
    pub fn total_held(&self) -> u128 {
        self.accounts.values().map(|a| a.balance).sum::<u128>() + self.treasury_balance
    }

    // ───────────────────────── Events ─────────────────────────

    /// Get all emitted events.
    pub fn events(&self) -> &[EventRecord] {
        &self.events
    }

    /// Drain all events (consume and clear).
    pub fn drain_events(&mut self) -> Vec<EventRecord> {
        std::mem::take(&mut self.events)
    }

    fn emit(&mut self, event: BankEvent) -> EventRecord {
        let record = EventRecord::new(event);
        self.events.push(record.clone());
        record
    }

    // ───────────────────────── Frame revert ─────────────────────────

    /// Capture the mutable ledger state before handing control to an outlet.
    fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot {
            accounts: self.accounts.clone(),
            treasury_balance: self.treasury_balance,
            event_count: self.events.len(),
        }
    }

    /// Revert to a snapshot. Discards everything committed since it was
    /// taken, including events and mutations from nested calls.
    fn restore(&mut self, snapshot: LedgerSnapshot) {
        self.accounts = snapshot.accounts;
        self.treasury_balance = snapshot.treasury_balance;
        self.events.truncate(snapshot.event_count);
    }
}

/// Pre-delivery state used to revert a frame whose transfer was rejected.
struct LedgerSnapshot {
    accounts: HashMap<Address, Account>,
    treasury_balance: u128,
    event_count: usize,
}
