use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::application::error::ApplicationError;

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct TokenRequestDTO {
    #[serde(rename = "channelName")]
    pub channel_name: Option<String>,
    /// `None` when absent, `Some(None)` when sent as `null`.
    #[serde(default, deserialize_with = "present_or_null")]
    pub uid: Option<Option<u32>>,
    #[serde(default, deserialize_with = "lenient_role")]
    pub role: Option<String>,
}

/// A non-string `role` carries no meaning and subscribes like a missing one.
fn lenient_role<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(role)) => Ok(Some(role)),
        _ => Ok(None),
    }
}

fn present_or_null<'de, D>(deserializer: D) -> Result<Option<Option<u32>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<u32>::deserialize(deserializer).map(Some)
}

impl TokenRequestDTO {
    pub fn from_json(body: &[u8]) -> Result<Self, ApplicationError> {
        serde_json::from_slice(body).map_err(|e| ApplicationError::Validation(e.to_string()))
    }

    /// The uid to sign with; 0 lets any user join.
    pub fn uid_or_any(&self) -> u32 {
        self.uid.flatten().unwrap_or(0)
    }

    /// Returns the channel name, rejecting a missing or empty one.
    pub fn require_channel_name(&self) -> Result<&str, ApplicationError> {
        match self.channel_name.as_deref() {
            Some(name) if !name.is_empty() => Ok(name),
            _ => Err(ApplicationError::missing_channel_name()),
        }
    }
}
