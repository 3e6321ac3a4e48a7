// LIMIT - Proof of Financial Restraint (Demo) - Core Library
// Exposes all modules for use in the CLI, API server, and tests

pub mod discipline;
pub mod ledger;
pub mod proof;

// Re-export commonly used types
pub use discipline::{evaluate_discipline, DisciplineResult, LedgerTotals};
pub use ledger::{
    demo_transactions, DisciplineParams, Ledger, Transaction, SAVINGS_CATEGORY,
};
pub use proof::{AttestationGenerator, ProofRecord, SimulatedAttestor};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
