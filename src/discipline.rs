// 📏 Discipline Evaluator - Budget, impulse, and savings rules
// The heart of the service: one pass over the ledger, three sums, three checks

use serde::{Deserialize, Serialize};

use crate::ledger::{DisciplineParams, Transaction, SAVINGS_CATEGORY};

// ============================================================================
// RESULT TYPES
// ============================================================================

/// Raw sums accumulated during evaluation, exposed for diagnostic visibility
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerTotals {
    pub total_spend: f64,
    pub impulse_spend: f64,
    pub total_savings: f64,
}

/// Outcome of the three discipline rules.
///
/// Recomputed fresh on every evaluation; `discipline_passed` is always the
/// conjunction of the three sub-checks, never cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisciplineResult {
    pub budget_ok: bool,
    pub impulse_ok: bool,
    pub savings_ok: bool,
    pub discipline_passed: bool,
    pub debug: LedgerTotals,
}

// ============================================================================
// EVALUATOR
// ============================================================================

/// Evaluate the discipline rules over a transaction sequence.
///
/// Single pass, three running sums:
/// - `total_savings`: amounts whose category is exactly `"savings"`
/// - `total_spend`: amounts of every other category
/// - `impulse_spend`: amounts whose category is in the impulse set, checked
///   independently of the savings/spend split
///
/// Then three checks: spend stays at or under the ceiling (inclusive),
/// impulse spend stays strictly below last month's (equality fails), savings
/// reach the target (inclusive). Pure function; no side effects.
pub fn evaluate_discipline(
    transactions: &[Transaction],
    params: &DisciplineParams,
) -> DisciplineResult {
    let mut total_spend = 0.0;
    let mut impulse_spend = 0.0;
    let mut total_savings = 0.0;

    for tx in transactions {
        if tx.category == SAVINGS_CATEGORY {
            total_savings += tx.amount;
        } else {
            total_spend += tx.amount;
        }

        // Membership is independent of the savings/spend split above
        if params.impulse_categories.contains(tx.category.as_str()) {
            impulse_spend += tx.amount;
        }
    }

    let budget_ok = total_spend <= params.budget_ceiling;
    let impulse_ok = impulse_spend < params.prior_impulse_spend;
    let savings_ok = total_savings >= params.savings_target;

    DisciplineResult {
        budget_ok,
        impulse_ok,
        savings_ok,
        discipline_passed: budget_ok && impulse_ok && savings_ok,
        debug: LedgerTotals {
            total_spend,
            impulse_spend,
            total_savings,
        },
    }
}

// ============================================================================
// TESTS
// ============================================================================
