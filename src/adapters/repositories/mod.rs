mod env_credentials_repository;
mod static_credentials_repository;

pub use env_credentials_repository::EnvCredentialsRepository;
pub use static_credentials_repository::StaticCredentialsRepository;
