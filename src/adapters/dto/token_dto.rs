use serde::Serialize;

use crate::domain::models::token::IssuedToken;

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
    #[serde(rename = "channelName")]
    pub channel_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<Option<u32>>,
}

impl From<IssuedToken> for TokenResponse {
    fn from(value: IssuedToken) -> Self {
        TokenResponse {
            token: value.token,
            channel_name: value.channel_name,
            uid: value.uid,
        }
    }
}
