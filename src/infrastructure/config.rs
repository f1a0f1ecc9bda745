use actix_web::http::Uri;
use std::env;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_CORS_ORIGINS: [&str; 3] = [
    "http://localhost:5173",
    "http://127.0.0.1:5173",
    "http://localhost:3000",
];
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("PORT must be a number between 0 and 65535, got {0:?}")]
    InvalidPort(String),
    #[error("PASSWORD_SCHEME must be \"plain\" or \"argon2\", got {0:?}")]
    UnknownPasswordScheme(String),
    #[error("CORS_ORIGINS must list at least one origin")]
    NoCorsOrigins,
    #[error("CORS_ORIGINS entry {0:?} is not a scheme://host origin")]
    InvalidCorsOrigin(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PasswordScheme {
    #[default]
    Plain,
    Argon2,
}

impl FromStr for PasswordScheme {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" => Ok(PasswordScheme::Plain),
            "argon2" => Ok(PasswordScheme::Argon2),
            _ => Err(ConfigError::UnknownPasswordScheme(s.to_string())),
        }
    }
}

impl fmt::Display for PasswordScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PasswordScheme::Plain => f.write_str("plain"),
            PasswordScheme::Argon2 => f.write_str("argon2"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub password_scheme: PasswordScheme,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            cors_origins: DEFAULT_CORS_ORIGINS.iter().map(|o| o.to_string()).collect(),
            password_scheme: PasswordScheme::default(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl AppConfig {
    /// Reads the process environment, after loading `.env` if there is one.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => defaults.port,
        };

        let cors_origins = match lookup("CORS_ORIGINS") {
            Some(raw) => {
                let origins: Vec<String> = raw
                    .split(',')
                    .map(str::trim)
                    .filter(|o| !o.is_empty())
                    .map(String::from)
                    .collect();
                if origins.is_empty() {
                    return Err(ConfigError::NoCorsOrigins);
                }
                for origin in &origins {
                    validate_origin(origin)?;
                }
                origins
            }
            None => defaults.cors_origins,
        };

        let password_scheme = match lookup("PASSWORD_SCHEME") {
            Some(raw) => raw.parse::<PasswordScheme>()?,
            None => defaults.password_scheme,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            cors_origins,
            password_scheme,
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// Wildcards and anything without a scheme and host make the CORS layer
// fail while the app is being built.
fn validate_origin(origin: &str) -> Result<(), ConfigError> {
    let invalid = || ConfigError::InvalidCorsOrigin(origin.to_string());
    if origin == "*" {
        return Err(invalid());
    }
    let uri = Uri::try_from(origin).map_err(|_| invalid())?;
    if uri.scheme().is_none() || uri.host().is_none() {
        return Err(invalid());
    }
    Ok(())
}
