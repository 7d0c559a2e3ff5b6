pub mod credential;
pub mod error;
pub mod refresh;
pub mod token_store;
