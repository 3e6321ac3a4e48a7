// 🧾 Simulated Proof of Restraint
// NOT real cryptography - a stamped attestation stub behind a swappable seam

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::discipline::DisciplineResult;

// ============================================================================
// PROOF RECORD
// ============================================================================

/// Placeholder attestation of a discipline result.
///
/// `proof_id` is random, never derived from the evaluated data; the record
/// commits to nothing and is unverifiable. It only marks the boundary where a
/// real proving backend would sit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProofRecord {
    /// `0x` followed by exactly 8 uppercase hex digits
    pub proof_id: String,

    /// Verbatim copy of `discipline_passed` from the evaluated result
    pub discipline_valid: bool,

    /// Wall-clock UTC time of issuance, RFC 3339
    pub timestamp: String,
}

// ============================================================================
// ATTESTATION GENERATOR
// ============================================================================

/// Seam for proof generation.
///
/// A real implementation (e.g. a zero-knowledge prover) can replace the stub
/// behind this trait without touching the evaluator or the server.
pub trait AttestationGenerator {
    fn attest(&self, result: &DisciplineResult) -> ProofRecord;
}

/// The demo attestor: random id, current clock, pass/fail echo. Nothing more.
pub struct SimulatedAttestor;

impl AttestationGenerator for SimulatedAttestor {
    fn attest(&self, result: &DisciplineResult) -> ProofRecord {
        let hex = Uuid::new_v4().simple().to_string();

        ProofRecord {
            proof_id: format!("0x{}", hex[..8].to_uppercase()),
            discipline_valid: result.discipline_passed,
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
