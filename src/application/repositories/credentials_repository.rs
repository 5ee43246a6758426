use crate::domain::config::credentials::AgoraCredentials;

pub trait CredentialsRepository: Send + Sync {
    /// Returns the credentials to sign the current request with.
    ///
    /// Implementations may return placeholder values; callers check
    /// [`AgoraCredentials::is_configured`] before signing.
    fn get_credentials(&self) -> AgoraCredentials;
}
