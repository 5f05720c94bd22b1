//! bank-sim — drive the SimpleBank contract end to end
//!
//! Replays the canonical interaction flow (register, deposit, withdraw,
//! treasury sweep, read back the public constants), then runs a seeded
//! random scenario and prints its report.
//!
//! Usage: `bank-sim [seed]`

use anyhow::Context;
use contracts::bank::SimpleBank;
use contracts::transfer::SettlementLedger;
use simulation::format::format_amount;
use simulation::scenario::{self, ScenarioConfig};
use types::fee::FeeBps;
use types::ids::Address;

const ETHER: u128 = 1_000_000_000_000_000_000;

fn main() -> Result<(), anyhow::Error> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let seed: u64 = match std::env::args().nth(1) {
        Some(arg) => arg.parse().context("seed must be an unsigned integer")?,
        None => 42,
    };

    interaction_flow()?;

    tracing::info!(seed, "Running seeded scenario");
    let report = scenario::run(&ScenarioConfig {
        seed,
        ..ScenarioConfig::default()
    });
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

/// The canonical interaction storyline against a fresh bank.
fn interaction_flow() -> Result<(), anyhow::Error> {
    let owner = Address::new("0x0123456789abcdef0123456789abcdef01234567");
    let treasury = Address::new("0xfee50000000000000000000000000000000000ee");
    let user = Address::new("0xa11ce00000000000000000000000000000000001");

    // Deploy with a 1% withdrawal fee
    let mut bank = SimpleBank::new(owner.clone(), FeeBps::try_new(100)?, treasury);
    let mut settlement = SettlementLedger::new();

    if bank.is_registered(&user) {
        tracing::info!(%user, "User is already registered");
    } else {
        tracing::info!(%user, "Registering user");
        bank.register(&user, "Cristian", "Chiera")?;
    }

    let deposit = ETHER / 50; // 0.02 ETH
    bank.deposit(&user, deposit)?;
    tracing::info!(amount = %format_amount(deposit), "Deposited");
    tracing::info!(balance = %format_amount(bank.balance_of(&user)), "User balance");

    let withdraw = ETHER / 1000; // 0.001 ETH
    bank.withdraw(&user, withdraw, &mut settlement)?;
    tracing::info!(
        amount = %format_amount(withdraw),
        received = %format_amount(settlement.held_by(&user)),
        "Withdrawn"
    );

    tracing::info!(owner = %bank.owner(), "Contract owner");
    tracing::info!(treasury = %bank.treasury(), fee = %bank.fee(), "Treasury config");
    tracing::info!(
        balance = %format_amount(bank.treasury_balance()),
        "Treasury balance"
    );

    let accrued = bank.treasury_balance();
    if accrued > 0 {
        bank.withdraw_treasury(&owner, accrued, &mut settlement)?;
        tracing::info!(amount = %format_amount(accrued), "Treasury swept");
    }

    Ok(())
}
