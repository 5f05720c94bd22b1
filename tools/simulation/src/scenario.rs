//! Seeded random operation sequences over the bank contract
//!
//! Replays a weighted mix of register/deposit/withdraw/treasury-sweep calls
//! from a deterministic RNG and asserts the conservation invariant after
//! every step: value held by the bank plus value delivered by settlement
//! equals value ever accepted.

use chrono::Utc;
use contracts::bank::SimpleBank;
use contracts::transfer::SettlementLedger;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use types::fee::FeeBps;
use types::ids::Address;
use uuid::Uuid;

/// Scenario parameters. Two runs with the same config produce the same
/// [`ScenarioTotals`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub seed: u64,
    pub steps: u32,
    pub user_count: usize,
    pub fee_bps: u32,
    /// Upper bound for random deposit/withdraw amounts, in wei
    pub max_amount: u128,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            steps: 1_000,
            user_count: 8,
            fee_bps: 100,
            max_amount: 5_000_000_000_000_000_000, // 5 ether
        }
    }
}

/// Deterministic counters accumulated over a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioTotals {
    pub registrations: u64,
    pub deposits: u64,
    pub withdrawals: u64,
    pub sweeps: u64,
    pub rejections: u64,
    pub total_deposited: u128,
    pub total_delivered: u128,
    pub final_user_balance: u128,
    pub final_treasury_balance: u128,
}

/// Run outcome: deterministic totals plus the run envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioReport {
    pub run_id: Uuid,
    pub completed_at: i64,
    pub config: ScenarioConfig,
    pub totals: ScenarioTotals,
}

fn user_address(index: usize) -> Address {
    Address::new(format!("0x{:040x}", index + 1))
}

fn owner_address() -> Address {
    Address::new(format!("0x{:040x}", 0xadu32))
}

fn treasury_address() -> Address {
    Address::new(format!("0x{:040x}", 0xfeeu32))
}

/// Execute a scenario.
///
/// # Panics
/// Panics if the conservation invariant breaks at any step — the scenario
/// exists to prove it cannot.
pub fn run(config: &ScenarioConfig) -> ScenarioReport {
    let fee = FeeBps::try_new(config.fee_bps).expect("scenario fee within range");
    let mut bank = SimpleBank::new(owner_address(), fee, treasury_address());
    let mut settlement = SettlementLedger::new();
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let mut totals = ScenarioTotals::default();

    for step in 0..config.steps {
        let user = user_address(rng.gen_range(0..config.user_count));
        let roll: u32 = rng.gen_range(0..100);

        let outcome = if roll < 15 {
            totals.registrations += 1;
            bank.register(&user, "Sim", format!("User{}", step)).map(|_| ())
        } else if roll < 55 {
            totals.deposits += 1;
            let amount = rng.gen_range(0..=config.max_amount);
            bank.deposit(&user, amount).map(|_| {
                totals.total_deposited += amount;
            })
        } else if roll < 90 {
            totals.withdrawals += 1;
            let amount = rng.gen_range(0..=config.max_amount);
            bank.withdraw(&user, amount, &mut settlement).map(|_| ())
        } else {
            totals.sweeps += 1;
            // Half the sweeps come from a non-owner and must be rejected
            let caller = if rng.gen_bool(0.5) { owner_address() } else { user.clone() };
            let amount = rng.gen_range(0..=bank.treasury_balance().max(1));
            bank.withdraw_treasury(&caller, amount, &mut settlement).map(|_| ())
        };

        if outcome.is_err() {
            totals.rejections += 1;
        }

        assert_eq!(
            bank.total_held() + settlement.total_delivered(),
            totals.total_deposited,
            "conservation violated at step {}",
            step
        );
    }

    totals.total_delivered = settlement.total_delivered();
    totals.final_treasury_balance = bank.treasury_balance();
    totals.final_user_balance = bank.total_held() - bank.treasury_balance();

    ScenarioReport {
        run_id: Uuid::now_v7(),
        completed_at: Utc::now().timestamp_millis(),
        config: config.clone(),
        totals,
    }
}
