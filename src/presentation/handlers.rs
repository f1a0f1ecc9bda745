use crate::application::auth_service::AuthService;
use crate::data::user_directory::InMemoryUserDirectory;
use crate::domain::error::DomainError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, info, instrument, warn};

pub const GREETING: &str = "Hello from Flask!";
pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields";

pub struct AppState {
    pub auth_service: AuthService<InMemoryUserDirectory>,
}

// Body for missing fields
#[derive(Serialize)]
struct FieldErrorResponse {
    error: &'static str,
}

// Body for every other failure
#[derive(Serialize)]
struct StatusErrorResponse {
    status: &'static str,
    message: &'static str,
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),
    #[error("User not found")]
    UserNotFound,
    #[error("Wrong password")]
    InvalidPassword,
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingFields(_) => StatusCode::BAD_REQUEST,
            ApiError::UserNotFound => StatusCode::NOT_FOUND,
            ApiError::InvalidPassword => StatusCode::UNAUTHORIZED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let error_msg = self.to_string();

        match self {
            ApiError::Internal(_) => {
                error!(error = %error_msg, status = %status, "Internal error")
            }
            _ => warn!(error = %error_msg, status = %status, "Request rejected"),
        }

        let mut builder = HttpResponse::build(status);
        match self {
            ApiError::MissingFields(_) => builder.json(FieldErrorResponse {
                error: MISSING_FIELDS_MESSAGE,
            }),
            ApiError::UserNotFound => builder.json(StatusErrorResponse {
                status: "error",
                message: "user not found",
            }),
            ApiError::InvalidPassword => builder.json(StatusErrorResponse {
                status: "error",
                message: "wrong password",
            }),
            ApiError::Internal(_) => builder.json(StatusErrorResponse {
                status: "error",
                message: "internal server error",
            }),
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::MissingFields(fields) => ApiError::MissingFields(fields),
            DomainError::UserNotFound => ApiError::UserNotFound,
            DomainError::InvalidPassword => ApiError::InvalidPassword,
            DomainError::Internal(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast::<DomainError>() {
            Ok(domain) => ApiError::from(domain),
            Err(other) => ApiError::Internal(other.to_string()),
        }
    }
}

#[derive(Serialize)]
struct ExampleResponse {
    message: &'static str,
}

#[instrument]
pub async fn example() -> HttpResponse {
    info!("Example requested");
    HttpResponse::Ok().json(ExampleResponse { message: GREETING })
}
