pub const APP_ID_ENV: &str = "AGORA_APP_ID";
pub const APP_CERTIFICATE_ENV: &str = "AGORA_APP_CERTIFICATE";

/// Value an unset `AGORA_APP_ID` resolves to.
pub const APP_ID_PLACEHOLDER: &str = "YOUR_APP_ID_PLACEHOLDER";
/// Value an unset `AGORA_APP_CERTIFICATE` resolves to.
pub const APP_CERTIFICATE_PLACEHOLDER: &str = "YOUR_APP_CERTIFICATE_PLACEHOLDER";

#[derive(Debug, Clone, PartialEq)]
pub struct AgoraCredentials {
    pub app_id: String,
    pub app_certificate: String,
}

impl AgoraCredentials {
    pub fn new(app_id: impl Into<String>, app_certificate: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            app_certificate: app_certificate.into(),
        }
    }

    /// Credentials as they look when neither variable is set.
    pub fn placeholder() -> Self {
        Self::new(APP_ID_PLACEHOLDER, APP_CERTIFICATE_PLACEHOLDER)
    }

    /// Reads both secrets from the process environment, falling back to the
    /// placeholder sentinels for anything unset.
    pub fn from_env() -> Self {
        Self::from_values(
            std::env::var(APP_ID_ENV).ok(),
            std::env::var(APP_CERTIFICATE_ENV).ok(),
        )
    }

    pub fn from_values(app_id: Option<String>, app_certificate: Option<String>) -> Self {
        Self {
            app_id: app_id.unwrap_or_else(|| APP_ID_PLACEHOLDER.to_string()),
            app_certificate: app_certificate
                .unwrap_or_else(|| APP_CERTIFICATE_PLACEHOLDER.to_string()),
        }
    }

    pub fn is_configured(&self) -> bool {
        let app_id = self.app_id.trim();
        let app_certificate = self.app_certificate.trim();

        !app_id.is_empty()
            && !app_certificate.is_empty()
            && app_id != APP_ID_PLACEHOLDER
            && app_certificate != APP_CERTIFICATE_PLACEHOLDER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_is_unconfigured() {
        assert!(!AgoraCredentials::placeholder().is_configured());
    }

    #[test]
    fn test_unset_values_fall_back_to_placeholders() {
        let credentials = AgoraCredentials::from_values(None, None);
        assert_eq!(credentials, AgoraCredentials::placeholder());
        assert!(!credentials.is_configured());

        let only_id = AgoraCredentials::from_values(
            Some("970ca35de60c44645bbae8a215061b33".to_string()),
            None,
        );
        assert_eq!(only_id.app_certificate, APP_CERTIFICATE_PLACEHOLDER);
        assert!(!only_id.is_configured());
    }

    #[test]
    fn test_set_values_are_used_as_is() {
        let credentials = AgoraCredentials::from_values(
            Some("970ca35de60c44645bbae8a215061b33".to_string()),
            Some("5cfd2fd1755d40ecb72977518be15d3b".to_string()),
        );
        assert_eq!(credentials.app_id, "970ca35de60c44645bbae8a215061b33");
        assert!(credentials.is_configured());
    }

    #[test]
    fn test_either_placeholder_is_unconfigured() {
        let missing_id = AgoraCredentials::new(APP_ID_PLACEHOLDER, "5cfd2fd1755d40ecb72977518be15d3b");
        let missing_cert =
            AgoraCredentials::new("970ca35de60c44645bbae8a215061b33", APP_CERTIFICATE_PLACEHOLDER);

        assert!(!missing_id.is_configured());
        assert!(!missing_cert.is_configured());
    }

    #[test]
    fn test_blank_values_are_unconfigured() {
        assert!(!AgoraCredentials::new("", "secret").is_configured());
        assert!(!AgoraCredentials::new("app", "   ").is_configured());
    }

    #[test]
    fn test_real_values_are_configured() {
        let credentials = AgoraCredentials::new(
            "970ca35de60c44645bbae8a215061b33",
            "5cfd2fd1755d40ecb72977518be15d3b",
        );
        assert!(credentials.is_configured());
    }
}
