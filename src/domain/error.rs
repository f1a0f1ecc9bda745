use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),
    #[error("User not found")]
    UserNotFound,
    #[error("Wrong password")]
    InvalidPassword,
    #[error("Internal error: {0}")]
    Internal(String),
}
