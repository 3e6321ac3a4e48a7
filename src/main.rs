use anyhow::Result;
use std::env;

use restraint::{AttestationGenerator, Ledger, SimulatedAttestor};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() > 1 && args[1] == "proof" {
        run_proof()?;
    } else if args.len() > 1 && args[1] != "report" {
        eprintln!("❌ Unknown command: {}", args[1]);
        eprintln!("   Usage: restraint [report|proof]");
        eprintln!("   Or run the API: cargo run --bin restraint-server");
        std::process::exit(1);
    } else {
        // Report mode (default)
        run_report()?;
    }

    Ok(())
}

fn run_report() -> Result<()> {
    println!("💸 LIMIT - Proof of Financial Restraint (Demo)");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let ledger = Ledger::demo();

    println!("\n📒 Demo month ({} transactions):", ledger.transactions().len());
    for tx in ledger.transactions() {
        println!("   {}  {:<10} {:>10.2}", tx.date, tx.category, tx.amount);
    }

    let params = ledger.params();
    let result = ledger.evaluate();

    println!("\n📏 Discipline rules:");
    println!(
        "   {} Budget:  spend {:.2} <= ceiling {:.2}",
        mark(result.budget_ok),
        result.debug.total_spend,
        params.budget_ceiling
    );
    println!(
        "   {} Impulse: impulse spend {:.2} < last month's {:.2}",
        mark(result.impulse_ok),
        result.debug.impulse_spend,
        params.prior_impulse_spend
    );
    println!(
        "   {} Savings: saved {:.2} >= target {:.2}",
        mark(result.savings_ok),
        result.debug.total_savings,
        params.savings_target
    );

    println!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    if result.discipline_passed {
        println!("🎉 Discipline PASSED - all three rules hold");
    } else {
        println!("❌ Discipline FAILED - at least one rule broken");
    }

    Ok(())
}

fn run_proof() -> Result<()> {
    println!("🧾 Generating simulated proof of restraint...");

    let ledger = Ledger::demo();
    let result = ledger.evaluate();
    let proof = SimulatedAttestor.attest(&result);

    println!("{}", serde_json::to_string_pretty(&proof)?);
    println!("\n⚠️  Placeholder attestation - not a cryptographic proof");

    Ok(())
}

fn mark(ok: bool) -> &'static str {
    if ok {
        "✓"
    } else {
        "✗"
    }
}
