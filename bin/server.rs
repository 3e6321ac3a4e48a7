// LIMIT - Proof of Financial Restraint (Demo) - Web Server
// REST API with Axum

use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use restraint::{
    AttestationGenerator, DisciplineResult, Ledger, ProofRecord, SimulatedAttestor, Transaction,
};

/// Shared application state
///
/// The ledger is read-only for the life of the process, so handlers share it
/// without locking. The attestor sits behind its trait so a real proving
/// backend can be swapped in here without touching the handlers.
#[derive(Clone)]
struct AppState {
    ledger: Arc<Ledger>,
    attestor: Arc<dyn AttestationGenerator + Send + Sync>,
}

/// Transactions listing response
#[derive(Serialize)]
struct TransactionsResponse {
    transactions: Vec<Transaction>,
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /health - Health check
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: restraint::VERSION,
    })
}

/// GET /transactions - Returns the mock monthly transactions
async fn get_transactions(State(state): State<AppState>) -> Json<TransactionsResponse> {
    Json(TransactionsResponse {
        transactions: state.ledger.transactions().to_vec(),
    })
}

/// POST /evaluate-discipline - Evaluates the financial discipline rules
async fn evaluate(State(state): State<AppState>) -> Json<DisciplineResult> {
    Json(state.ledger.evaluate())
}

/// POST /generate-proof - Re-runs evaluation, then emits a simulated proof
async fn generate_proof(State(state): State<AppState>) -> Json<ProofRecord> {
    let result = state.ledger.evaluate();
    Json(state.attestor.attest(&result))
}

// ============================================================================
// Main Server
// ============================================================================

fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/transactions", get(get_transactions))
        .route("/evaluate-discipline", post(evaluate))
        .route("/generate-proof", post(generate_proof))
        .with_state(state)
        .layer(CorsLayer::permissive())
}

#[tokio::main]
async fn main() {
    println!("🌐 LIMIT - Proof of Financial Restraint (Demo)");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    // Build the demo ledger once; every request reads the same data
    let ledger = Ledger::demo();
    println!("✓ Demo ledger loaded: {} transactions", ledger.transactions().len());

    let state = AppState {
        ledger: Arc::new(ledger),
        attestor: Arc::new(SimulatedAttestor),
    };

    let app = app(state);

    // Start server
    let addr = "0.0.0.0:8000";
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    println!("\n🚀 Server running on http://localhost:8000");
    println!("   GET  /transactions");
    println!("   POST /evaluate-discipline");
    println!("   POST /generate-proof");
    println!("\n   Press Ctrl+C to stop\n");

    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn demo_state() -> AppState {
        AppState {
            ledger: Arc::new(Ledger::demo()),
            attestor: Arc::new(SimulatedAttestor),
        }
    }

    #[tokio::test]
    async fn test_transactions_handler_returns_fixture() {
        let Json(response) = get_transactions(State(demo_state())).await;

        assert_eq!(response.transactions.len(), 5);
        assert_eq!(response.transactions[0].category, "food");
        assert_eq!(response.transactions[0].amount, 3000.0);
    }

    #[tokio::test]
    async fn test_evaluate_handler_matches_demo_month() {
        let Json(result) = evaluate(State(demo_state())).await;

        assert!(result.budget_ok);
        assert!(!result.impulse_ok);
        assert!(result.savings_ok);
        assert!(!result.discipline_passed);
        assert_eq!(result.debug.total_spend, 7700.0);
        assert_eq!(result.debug.impulse_spend, 7700.0);
        assert_eq!(result.debug.total_savings, 5000.0);
    }

    #[tokio::test]
    async fn test_generate_proof_handler() {
        let Json(proof) = generate_proof(State(demo_state())).await;

        assert!(proof.proof_id.starts_with("0x"));
        assert_eq!(proof.proof_id.len(), 10);
        assert!(!proof.discipline_valid, "demo month breaks the impulse rule");
    }

    #[tokio::test]
    async fn test_health_handler() {
        let Json(health) = health_check().await;

        assert_eq!(health.status, "ok");
        assert_eq!(health.version, restraint::VERSION);
    }

    #[tokio::test]
    async fn test_routes_are_wired() {
        let app = app(demo_state());

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/transactions")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/evaluate-discipline")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/generate-proof")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_route_and_wrong_method() {
        let app = app(demo_state());

        let response = app
            .clone()
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        // Evaluation is a POST in the API contract
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/evaluate-discipline")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
