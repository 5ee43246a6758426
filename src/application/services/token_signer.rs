use crate::{
    application::error::ApplicationError,
    domain::{config::credentials::AgoraCredentials, models::token::TokenGrant},
};

pub trait TokenSigner: Send + Sync {
    /// Mints a signed token for `grant` using the application's secrets.
    fn sign(
        &self,
        credentials: &AgoraCredentials,
        grant: &TokenGrant,
    ) -> Result<String, ApplicationError>;
}
