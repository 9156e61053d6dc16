// HTTP routes configuration

use crate::core::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // GraphQL endpoint and interactive explorer
        .route("/graphql", post(crate::handlers::graphql::graphql_handler))
        .route("/graphiql", get(crate::handlers::graphql::graphiql_handler))

        // Liveness probe
        .route("/health", get(crate::handlers::health::health_handler))

        // 404 fallback for all unmatched routes
        .fallback(crate::handlers::fallback::fallback_handler)

        .with_state(state)
}
