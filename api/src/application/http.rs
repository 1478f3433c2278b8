pub mod authentication;
pub mod health;
pub mod recipe;
pub mod server;
