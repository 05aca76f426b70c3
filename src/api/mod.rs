//! REST API for the evaluated scenario and ad-hoc evaluations.
//!
//! Provides three endpoints:
//! - `GET /summary`: scenario inputs and financial summary
//! - `GET /schedule`: repayment schedule with optional year range filtering
//! - `POST /evaluate`: evaluates a scenario posted as JSON

mod handlers;
mod types;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};

use crate::config::ScenarioConfig;
use crate::finance::Evaluation;

/// Immutable application state shared across all request handlers.
///
/// Constructed once after the startup evaluation and wrapped in `Arc`;
/// no locks are needed since all data is read-only.
pub struct AppState {
    /// Scenario evaluated at startup.
    pub scenario: ScenarioConfig,
    /// Its evaluation.
    pub evaluation: Evaluation,
}

/// Builds the axum router with all API routes.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/summary", get(handlers::get_summary))
        .route("/schedule", get(handlers::get_schedule))
        .route("/evaluate", post(handlers::post_evaluate))
        .with_state(state)
}

/// Binds to the given address and serves the API.
///
/// # Errors
///
/// Returns an `io::Error` if the listener cannot bind or the server fails.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) -> std::io::Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    eprintln!("API server listening on http://{addr}");
    axum::serve(listener, app).await
}
