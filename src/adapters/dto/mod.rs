pub mod token_dto;
