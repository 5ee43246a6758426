mod token_service;
mod token_signer;

pub use token_service::TokenService;
pub use token_signer::TokenSigner;
