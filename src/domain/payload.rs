use crate::domain::error::DomainError;
use serde::Deserialize;
use serde_json::{Map, Value};

/// A JSON object body. Values are never type-checked, only looked up by key.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct RequestPayload(Map<String, Value>);

impl RequestPayload {
    /// Fails with the list of absent keys. A key mapped to `null` is present.
    pub fn require(&self, keys: &[&str]) -> Result<(), DomainError> {
        let missing: Vec<String> = keys
            .iter()
            .filter(|key| !self.0.contains_key(**key))
            .map(|key| key.to_string())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(DomainError::MissingFields(missing))
        }
    }

    fn take(&mut self, key: &str) -> Value {
        self.0.remove(key).unwrap_or(Value::Null)
    }
}

impl From<Value> for RequestPayload {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(fields) => Self(fields),
            _ => Self::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RegistrationRequest {
    pub name: Value,
    pub last_name: Value,
    pub login: Value,
    pub password: Value,
}

impl RegistrationRequest {
    pub const REQUIRED: [&'static str; 4] = ["name", "lastName", "login", "password"];
}

impl TryFrom<RequestPayload> for RegistrationRequest {
    type Error = DomainError;

    fn try_from(mut payload: RequestPayload) -> Result<Self, Self::Error> {
        payload.require(&Self::REQUIRED)?;
        Ok(Self {
            name: payload.take("name"),
            last_name: payload.take("lastName"),
            login: payload.take("login"),
            password: payload.take("password"),
        })
    }
}

#[derive(Debug, Clone)]
pub struct LoginRequest {
    pub login: Value,
    pub password: Value,
}

impl LoginRequest {
    pub const REQUIRED: [&'static str; 2] = ["login", "password"];
}

impl TryFrom<RequestPayload> for LoginRequest {
    type Error = DomainError;

    fn try_from(mut payload: RequestPayload) -> Result<Self, Self::Error> {
        payload.require(&Self::REQUIRED)?;
        Ok(Self {
            login: payload.take("login"),
            password: payload.take("password"),
        })
    }
}

#[derive(Debug, Clone)]
pub struct EmailConfirmRequest {
    pub code: Value,
}

impl TryFrom<RequestPayload> for EmailConfirmRequest {
    type Error = DomainError;

    fn try_from(mut payload: RequestPayload) -> Result<Self, Self::Error> {
        payload.require(&["code"])?;
        Ok(Self {
            code: payload.take("code"),
        })
    }
}
