/// Validity window of every issued token.
pub const TOKEN_TTL_SECONDS: u64 = 3600;

const PUBLISHER_ROLE: &str = "publisher";

/// Privilege level a token grants inside a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenRole {
    Publisher,
    Subscriber,
}

impl TokenRole {
    /// Only the exact string `"publisher"` grants publishing; everything else,
    /// including no role at all, subscribes.
    pub fn from_requested(role: Option<&str>) -> Self {
        match role {
            Some(PUBLISHER_ROLE) => TokenRole::Publisher,
            _ => TokenRole::Subscriber,
        }
    }
}

/// Everything the signer needs to mint one token.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenGrant {
    pub channel_name: String,
    pub uid: u32,
    pub role: TokenRole,
    pub issued_at: u64,
    pub expires_at: u64,
}

impl TokenGrant {
    pub fn new(channel_name: String, uid: u32, role: TokenRole, issued_at: u64) -> Self {
        Self {
            channel_name,
            uid,
            role,
            issued_at,
            expires_at: issued_at + TOKEN_TTL_SECONDS,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IssuedToken {
    pub token: String,
    pub channel_name: String,
    /// The uid exactly as the caller sent it, `null` included.
    pub uid: Option<Option<u32>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publisher_maps_to_publisher() {
        assert_eq!(TokenRole::from_requested(Some("publisher")), TokenRole::Publisher);
    }

    #[test]
    fn test_everything_else_maps_to_subscriber() {
        for role in [None, Some("subscriber"), Some("Publisher"), Some(" publisher"), Some("")] {
            assert_eq!(TokenRole::from_requested(role), TokenRole::Subscriber);
        }
    }

    #[test]
    fn test_grant_expires_one_hour_after_issue() {
        let grant = TokenGrant::new("room1".to_string(), 0, TokenRole::Subscriber, 1_700_000_000);
        assert_eq!(grant.expires_at, 1_700_003_600);
    }
}
