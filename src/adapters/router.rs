use axum::{middleware, Router};
use tower_http::trace::TraceLayer;

use crate::adapters::{
    controllers::token_controller::TokenController, middleware::cors_headers, state::AppState,
};

/// Every path and method lands on the token endpoint.
pub fn build_router(app_state: AppState) -> Router {
    Router::new()
        .fallback(TokenController::issue_token)
        .layer(middleware::from_fn(cors_headers))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
