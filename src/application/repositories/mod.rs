pub mod credentials_repository;
