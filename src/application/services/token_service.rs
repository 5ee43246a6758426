use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info, warn};

use crate::{
    application::{
        dto::token_dto::TokenRequestDTO, error::ApplicationError,
        repositories::credentials_repository::CredentialsRepository, services::TokenSigner,
    },
    domain::models::token::{IssuedToken, TokenGrant, TokenRole},
};

/// Turns a parsed token request into a signed RTC token.
pub struct TokenService {
    credentials_repository: Arc<dyn CredentialsRepository>,
    signer: Arc<dyn TokenSigner>,
}

impl TokenService {
    pub fn new(
        credentials_repository: Arc<dyn CredentialsRepository>,
        signer: Arc<dyn TokenSigner>,
    ) -> Self {
        Self {
            credentials_repository,
            signer,
        }
    }

    /// Whether the credentials currently on hand could sign a token.
    pub fn is_configured(&self) -> bool {
        self.credentials_repository.get_credentials().is_configured()
    }

    pub fn issue(&self, request: TokenRequestDTO) -> Result<IssuedToken, ApplicationError> {
        let now = Utc::now().timestamp().max(0) as u64;
        self.issue_at(request, now)
    }

    /// Same as [`TokenService::issue`] with an explicit issue time in unix seconds.
    pub fn issue_at(
        &self,
        request: TokenRequestDTO,
        now: u64,
    ) -> Result<IssuedToken, ApplicationError> {
        let channel_name = request.require_channel_name().map_err(|e| {
            warn!("Rejected token request without channelName");
            e
        })?;

        let credentials = self.credentials_repository.get_credentials();
        if !credentials.is_configured() {
            error!("Refusing to issue token: Agora credentials are not configured");
            return Err(ApplicationError::Configuration);
        }

        let role = TokenRole::from_requested(request.role.as_deref());
        let grant = TokenGrant::new(
            channel_name.to_string(),
            request.uid_or_any(),
            role,
            now,
        );

        let token = self.signer.sign(&credentials, &grant).map_err(|e| {
            warn!("Token signing failed for channel '{}': {}", grant.channel_name, e);
            e
        })?;

        info!(
            channel = %grant.channel_name,
            uid = grant.uid,
            role = ?grant.role,
            expires_at = grant.expires_at,
            "Issued RTC token"
        );

        Ok(IssuedToken {
            token,
            channel_name: grant.channel_name,
            uid: request.uid,
        })
    }
}
