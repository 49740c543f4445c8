//! Route definitions for the Lychee Guard API

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/assessments", assessment_routes(state))
        .nest("/payouts", payout_routes())
        .nest("/plans", plan_routes())
}

/// Assessment routes
fn assessment_routes(state: &AppState) -> Router<AppState> {
    // base64 inflates uploads by a third, leave headroom for the JSON envelope
    let body_limit = state.config.analysis.max_upload_bytes / 3 * 4 + 64 * 1024;

    Router::new()
        .route(
            "/analyze",
            post(handlers::analyze_image).layer(DefaultBodyLimit::max(body_limit)),
        )
        .route("/stats", post(handlers::assessment_stats))
}

/// Payout routes
fn payout_routes() -> Router<AppState> {
    Router::new().route("/calculate", post(handlers::calculate_payout))
}

/// Insurance plan routes
fn plan_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_plans))
        .route("/:plan_id/quote", post(handlers::quote_plan))
}
