use axum::extract::FromRef;
use std::sync::Arc;

use crate::application::services::TokenService;

#[derive(Clone, FromRef)]
pub struct AppState {
    pub token_service: Arc<TokenService>,
}

impl AppState {
    pub fn new(token_service: TokenService) -> Self {
        Self {
            token_service: Arc::new(token_service),
        }
    }
}
