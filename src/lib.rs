//! HTTP service minting short-lived Agora RTC tokens.

pub mod adapters;
pub mod application;
pub mod domain;
pub mod services;

use std::sync::Arc;

use adapters::{repositories::EnvCredentialsRepository, state::AppState};
use application::{repositories::credentials_repository::CredentialsRepository, services::TokenService};
use services::AgoraTokenSigner;

pub use adapters::router::build_router;

/// Application state signing with [`AgoraTokenSigner`] and the given credentials.
pub fn app_state(credentials_repository: Arc<dyn CredentialsRepository>) -> AppState {
    AppState::new(TokenService::new(
        credentials_repository,
        Arc::new(AgoraTokenSigner::new()),
    ))
}

/// Application state reading credentials from the process environment.
pub fn app_state_from_env() -> AppState {
    app_state(Arc::new(EnvCredentialsRepository::new()))
}
