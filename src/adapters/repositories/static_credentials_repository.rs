use crate::{
    application::repositories::credentials_repository::CredentialsRepository,
    domain::config::credentials::AgoraCredentials,
};

/// Credentials fixed at construction time.
#[derive(Debug, Clone)]
pub struct StaticCredentialsRepository {
    credentials: AgoraCredentials,
}

impl StaticCredentialsRepository {
    pub fn new(credentials: AgoraCredentials) -> Self {
        Self { credentials }
    }
}

impl CredentialsRepository for StaticCredentialsRepository {
    fn get_credentials(&self) -> AgoraCredentials {
        self.credentials.clone()
    }
}
