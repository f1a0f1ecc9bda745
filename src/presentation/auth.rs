use crate::application::auth_service::RegisteredUser;
use crate::domain::payload::{EmailConfirmRequest, LoginRequest, RegistrationRequest, RequestPayload};
use crate::domain::user::PublicUser;
use crate::presentation::handlers::{ApiError, AppState};
use actix_web::{HttpResponse, web};
use serde::Serialize;
use serde_json::Value;
use tracing::{info, instrument};

const SUCCESS: &str = "success";

#[derive(Serialize)]
pub struct RegisterResponse {
    pub status: &'static str,
    pub user: RegisteredUser,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub status: &'static str,
    pub user: PublicUser,
    pub token: String,
}

#[derive(Serialize)]
pub struct EmailConfirmResponse {
    pub status: &'static str,
    pub code: Value,
}

#[instrument(skip(state, payload))]
pub async fn register(
    state: web::Data<AppState>,
    payload: web::Json<RequestPayload>,
) -> Result<HttpResponse, ApiError> {
    info!("Registration request received");
    let req = RegistrationRequest::try_from(payload.into_inner())?;

    let user = state.auth_service.register(req).await?;

    Ok(HttpResponse::Ok().json(RegisterResponse {
        status: SUCCESS,
        user,
    }))
}

#[instrument(skip(state, payload))]
pub async fn login(
    state: web::Data<AppState>,
    payload: web::Json<RequestPayload>,
) -> Result<HttpResponse, ApiError> {
    info!("Login request received");
    let req = LoginRequest::try_from(payload.into_inner())?;

    let outcome = state.auth_service.login(req).await?;

    Ok(HttpResponse::Ok().json(LoginResponse {
        status: SUCCESS,
        user: outcome.user,
        token: outcome.token,
    }))
}

#[instrument(skip(state, payload))]
pub async fn email_confirm(
    state: web::Data<AppState>,
    payload: web::Json<RequestPayload>,
) -> Result<HttpResponse, ApiError> {
    info!("Email confirmation request received");
    let req = EmailConfirmRequest::try_from(payload.into_inner())?;

    let code = state.auth_service.confirm_email(req).await?;

    Ok(HttpResponse::Ok().json(EmailConfirmResponse {
        status: SUCCESS,
        code,
    }))
}
