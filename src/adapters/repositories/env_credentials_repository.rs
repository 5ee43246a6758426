use crate::{
    application::repositories::credentials_repository::CredentialsRepository,
    domain::config::credentials::AgoraCredentials,
};

/// Reads `AGORA_APP_ID` / `AGORA_APP_CERTIFICATE` on every call, so rotated
/// secrets are picked up without a restart.
#[derive(Debug, Default, Clone)]
pub struct EnvCredentialsRepository;

impl EnvCredentialsRepository {
    pub fn new() -> Self {
        Self
    }
}

impl CredentialsRepository for EnvCredentialsRepository {
    fn get_credentials(&self) -> AgoraCredentials {
        AgoraCredentials::from_env()
    }
}
