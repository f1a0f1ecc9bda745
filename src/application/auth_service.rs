use crate::domain::error::DomainError;
use crate::domain::payload::{EmailConfirmRequest, LoginRequest, RegistrationRequest};
use crate::domain::repository::UserDirectory;
use crate::domain::user::PublicUser;
use crate::infrastructure::security::{DUMMY_TOKEN, PasswordVerifier};
use anyhow::Result;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, info, instrument, trace, warn};

/// The user as submitted to `/register`, echoed back without the password.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredUser {
    pub name: Value,
    pub last_name: Value,
    pub login: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoginOutcome {
    pub user: PublicUser,
    pub token: String,
}

pub struct AuthService<R: UserDirectory> {
    directory: Arc<R>,
    verifier: Arc<dyn PasswordVerifier>,
}

impl<R: UserDirectory> AuthService<R> {
    pub fn new(directory: Arc<R>, verifier: Arc<dyn PasswordVerifier>) -> Self {
        Self {
            directory,
            verifier,
        }
    }

    /// Accepts the registration without storing anything.
    #[instrument(skip(self, req), fields(login = %req.login))]
    pub async fn register(&self, req: RegistrationRequest) -> Result<RegisteredUser> {
        trace!("Starting registration");

        let user = RegisteredUser {
            name: req.name,
            last_name: req.last_name,
            login: req.login,
        };

        info!("Registration accepted");
        Ok(user)
    }

    #[instrument(skip(self, req), fields(login = %req.login))]
    pub async fn login(&self, req: LoginRequest) -> Result<LoginOutcome> {
        trace!("Starting login");

        // Only strings can name a directory entry.
        let login = match &req.login {
            Value::String(login) => login.as_str(),
            other => {
                warn!(login = %other, "Login is not a string");
                return Err(DomainError::UserNotFound.into());
            }
        };

        let user = self
            .directory
            .find_by_login(login)
            .await?
            .ok_or_else(|| {
                warn!(login = login, "User not found during login");
                DomainError::UserNotFound
            })?;

        let is_valid = match &req.password {
            Value::String(password) => {
                self.verifier
                    .verify(password, &user.password)
                    .map_err(|e| {
                        error!(error = %e, "Failed to verify password");
                        e
                    })?
            }
            _ => {
                debug!("Password is not a string");
                false
            }
        };

        if !is_valid {
            warn!(login = %user.login, "Wrong password during login");
            return Err(DomainError::InvalidPassword.into());
        }

        info!(login = %user.login, "Login successful");
        Ok(LoginOutcome {
            user: user.to_public(),
            token: DUMMY_TOKEN.to_string(),
        })
    }

    #[instrument(skip(self, req), fields(code = %req.code))]
    pub async fn confirm_email(&self, req: EmailConfirmRequest) -> Result<Value> {
        info!("Email confirmation code received");
        Ok(req.code)
    }
}
