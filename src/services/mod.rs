mod access_token;
mod agora_token_signer;
mod error;

pub use agora_token_signer::AgoraTokenSigner;
