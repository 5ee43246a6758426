use thiserror::Error;

pub const CREDENTIALS_NOT_SET: &str = "Agora credentials not set in environment variables";
pub const CHANNEL_NAME_REQUIRED: &str = "channelName is required";

#[derive(Debug, Error, PartialEq)]
pub enum ApplicationError {
    /// The caller sent a body that cannot be turned into a token request.
    #[error("{0}")]
    Validation(String),

    /// The server has no usable credentials; only an operator can fix this.
    #[error("Agora credentials not set in environment variables")]
    Configuration,

    #[error("{0}")]
    Signing(String),
}

impl ApplicationError {
    pub fn missing_channel_name() -> Self {
        ApplicationError::Validation(CHANNEL_NAME_REQUIRED.to_string())
    }
}
