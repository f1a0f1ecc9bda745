pub mod error;
pub mod payload;
pub mod repository;
pub mod user;
