use thiserror::Error;

use crate::application::error::ApplicationError;

#[derive(Debug, Error, PartialEq)]
pub enum SigningError {
    #[error("invalid app id")]
    InvalidAppId,

    #[error("invalid app certificate")]
    InvalidAppCertificate,

    #[error("invalid expiration: {0}")]
    InvalidExpiration(String),

    #[error("token encoding failed: {0}")]
    Encoding(String),
}

impl From<SigningError> for ApplicationError {
    fn from(error: SigningError) -> Self {
        ApplicationError::Signing(error.to_string())
    }
}

impl From<std::io::Error> for SigningError {
    fn from(error: std::io::Error) -> Self {
        SigningError::Encoding(error.to_string())
    }
}
