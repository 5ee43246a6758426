pub mod token_controller;
