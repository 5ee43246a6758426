use rand::Rng;

use crate::{
    application::{error::ApplicationError, services::TokenSigner},
    domain::{
        config::credentials::AgoraCredentials,
        models::token::{TokenGrant, TokenRole},
    },
    services::{
        access_token::{AccessToken2, RtcPrivilege, RtcService},
        error::SigningError,
    },
};

const MAX_SALT: u32 = 99_999_999;

/// Signs RTC tokens in the AccessToken2 format.
#[derive(Debug, Default, Clone)]
pub struct AgoraTokenSigner;

impl AgoraTokenSigner {
    pub fn new() -> Self {
        Self
    }

    /// Builds the token for `grant` with a caller-chosen salt.
    pub fn build_token(
        credentials: &AgoraCredentials,
        grant: &TokenGrant,
        salt: u32,
    ) -> Result<String, SigningError> {
        let issue_ts = u32::try_from(grant.issued_at).map_err(|_| {
            SigningError::InvalidExpiration(format!("issue time {} out of range", grant.issued_at))
        })?;
        let expires_at = u32::try_from(grant.expires_at).map_err(|_| {
            SigningError::InvalidExpiration(format!("expiry {} out of range", grant.expires_at))
        })?;
        if expires_at <= issue_ts {
            return Err(SigningError::InvalidExpiration(format!(
                "expiry {} is not after issue time {}",
                expires_at, issue_ts
            )));
        }

        // Both the token and its privileges carry lifetimes relative to issue_ts.
        let ttl = expires_at - issue_ts;

        let mut service = RtcService::new(&grant.channel_name, grant.uid);
        service.add_privilege(RtcPrivilege::JoinChannel, ttl);
        if grant.role == TokenRole::Publisher {
            service.add_privilege(RtcPrivilege::PublishAudioStream, ttl);
            service.add_privilege(RtcPrivilege::PublishVideoStream, ttl);
            service.add_privilege(RtcPrivilege::PublishDataStream, ttl);
        }

        let mut token = AccessToken2::new(
            &credentials.app_id,
            &credentials.app_certificate,
            issue_ts,
            ttl,
            salt,
        );
        token.add_service(service);
        token.build()
    }
}

impl TokenSigner for AgoraTokenSigner {
    fn sign(
        &self,
        credentials: &AgoraCredentials,
        grant: &TokenGrant,
    ) -> Result<String, ApplicationError> {
        let salt = rand::thread_rng().gen_range(1..=MAX_SALT);
        Ok(Self::build_token(credentials, grant, salt)?)
    }
}
