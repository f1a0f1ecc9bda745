use crate::domain::error::DomainError;
use crate::infrastructure::config::PasswordScheme;
use argon2::Argon2;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier as _, SaltString};
use rand_core::OsRng;
use std::sync::Arc;

/// Placeholder handed out on every successful login.
pub const DUMMY_TOKEN: &str = "dummy_token_for_example";

// Argon2 parameters for 50-150ms target latency
const ARGON2_M_COST: u32 = 19456; // 19 MB
const ARGON2_T_COST: u32 = 2;
const ARGON2_P_COST: u32 = 1;

/// Turns passwords into stored credentials and checks them later.
pub trait PasswordVerifier: Send + Sync {
    fn scheme(&self) -> PasswordScheme;
    fn hash(&self, password: &str) -> Result<String, DomainError>;
    fn verify(&self, password: &str, stored: &str) -> Result<bool, DomainError>;
}

/// Stores passwords as-is and compares by equality. Mock use only.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainTextVerifier;

impl PasswordVerifier for PlainTextVerifier {
    fn scheme(&self) -> PasswordScheme {
        PasswordScheme::Plain
    }

    fn hash(&self, password: &str) -> Result<String, DomainError> {
        Ok(password.to_string())
    }

    fn verify(&self, password: &str, stored: &str) -> Result<bool, DomainError> {
        Ok(password == stored)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Argon2Verifier;

impl Argon2Verifier {
    fn argon2(&self) -> Result<Argon2<'static>, DomainError> {
        let params = argon2::Params::new(ARGON2_M_COST, ARGON2_T_COST, ARGON2_P_COST, None)
            .map_err(|e| DomainError::Internal(format!("Invalid argon2 parameters: {}", e)))?;
        Ok(Argon2::new(
            argon2::Algorithm::Argon2id,
            argon2::Version::V0x13,
            params,
        ))
    }
}

impl PasswordVerifier for Argon2Verifier {
    fn scheme(&self) -> PasswordScheme {
        PasswordScheme::Argon2
    }

    fn hash(&self, password: &str) -> Result<String, DomainError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2()?
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| DomainError::Internal(format!("Failed to hash password: {}", e)))?;
        Ok(hash.to_string())
    }

    fn verify(&self, password: &str, stored: &str) -> Result<bool, DomainError> {
        let parsed = PasswordHash::new(stored)
            .map_err(|e| DomainError::Internal(format!("Malformed password hash: {}", e)))?;

        match self.argon2()?.verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(DomainError::Internal(format!(
                "Failed to verify password: {}",
                e
            ))),
        }
    }
}

pub fn verifier_for(scheme: PasswordScheme) -> Arc<dyn PasswordVerifier> {
    match scheme {
        PasswordScheme::Plain => Arc::new(PlainTextVerifier),
        PasswordScheme::Argon2 => Arc::new(Argon2Verifier),
    }
}
