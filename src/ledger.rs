// 💳 Ledger - Demo transaction data and discipline parameters
// Fixed in-memory fixture, no real bank data, no persistence

use anyhow::{bail, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::discipline::{evaluate_discipline, DisciplineResult};

/// Category label that routes an amount into savings instead of spend
pub const SAVINGS_CATEGORY: &str = "savings";

// ============================================================================
// TRANSACTION
// ============================================================================

/// A single monthly transaction. Immutable once constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub amount: f64,
    pub category: String,
    pub date: NaiveDate,
}

impl Transaction {
    pub fn new(amount: f64, category: impl Into<String>, date: NaiveDate) -> Self {
        Transaction {
            amount,
            category: category.into(),
            date,
        }
    }
}

// ============================================================================
// DISCIPLINE PARAMETERS
// ============================================================================

/// The four process-wide rule constants, loaded once at startup.
#[derive(Debug, Clone)]
pub struct DisciplineParams {
    /// Monthly spend ceiling (inclusive boundary)
    pub budget_ceiling: f64,

    /// Minimum savings for the month (inclusive boundary)
    pub savings_target: f64,

    /// Previous month's impulse spend; current impulse must stay strictly below it
    pub prior_impulse_spend: f64,

    /// Categories counted as impulse spending (exact-string membership)
    pub impulse_categories: HashSet<String>,
}

impl DisciplineParams {
    /// Hardcoded demo parameters
    pub fn demo() -> Self {
        DisciplineParams {
            budget_ceiling: 20000.0,
            savings_target: 5000.0,
            prior_impulse_spend: 4000.0,
            impulse_categories: ["food", "shopping", "travel"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

// ============================================================================
// LEDGER
// ============================================================================

/// Immutable ledger: the transaction collection plus the rule parameters.
///
/// Built once at process start and shared by reference from then on. There is
/// no mutation path; every evaluation reads the same data.
pub struct Ledger {
    transactions: Vec<Transaction>,
    params: DisciplineParams,
}

impl Ledger {
    /// Assemble a ledger, rejecting malformed records.
    ///
    /// Policy: a non-finite amount, a negative amount, or a blank category
    /// fails assembly. Amounts of exactly zero are valid. The evaluator never
    /// sees records that were not accepted here.
    pub fn new(transactions: Vec<Transaction>, params: DisciplineParams) -> Result<Self> {
        for (index, tx) in transactions.iter().enumerate() {
            if !tx.amount.is_finite() {
                bail!("transaction {} has a non-finite amount", index);
            }
            if tx.amount < 0.0 {
                bail!(
                    "transaction {} has a negative amount: {}",
                    index,
                    tx.amount
                );
            }
            if tx.category.trim().is_empty() {
                bail!("transaction {} has an empty category", index);
            }
        }

        Ok(Ledger {
            transactions,
            params,
        })
    }

    /// Ledger pre-loaded with the demo month
    pub fn demo() -> Self {
        Ledger::new(demo_transactions(), DisciplineParams::demo())
            .expect("demo fixture is well-formed")
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn params(&self) -> &DisciplineParams {
        &self.params
    }

    /// Run the discipline rules over this ledger
    pub fn evaluate(&self) -> DisciplineResult {
        evaluate_discipline(&self.transactions, &self.params)
    }
}

// ============================================================================
// DEMO FIXTURE
// ============================================================================

/// Mock transactions for the demo month. Fully hardcoded.
pub fn demo_transactions() -> Vec<Transaction> {
    vec![
        Transaction::new(3000.0, "food", demo_date(2026, 1, 5)),
        Transaction::new(1500.0, "shopping", demo_date(2026, 1, 7)),
        Transaction::new(2000.0, "travel", demo_date(2026, 1, 10)),
        Transaction::new(5000.0, SAVINGS_CATEGORY, demo_date(2026, 1, 12)),
        Transaction::new(1200.0, "food", demo_date(2026, 1, 15)),
    ]
}

fn demo_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

// ============================================================================
// TESTS
// ============================================================================
