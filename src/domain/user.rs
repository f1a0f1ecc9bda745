use serde::Serialize;

/// A user known to the directory. `password` holds the stored credential,
/// whose format depends on the configured password scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub name: String,
    pub last_name: String,
    pub login: String,
    pub password: String,
}

impl UserRecord {
    pub fn new(name: &str, last_name: &str, login: &str, password: &str) -> Self {
        Self {
            name: name.to_string(),
            last_name: last_name.to_string(),
            login: login.to_string(),
            password: password.to_string(),
        }
    }

    pub fn to_public(&self) -> PublicUser {
        PublicUser {
            name: self.name.clone(),
            last_name: self.last_name.clone(),
            login: self.login.clone(),
        }
    }
}

/// What clients get to see of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub name: String,
    pub last_name: String,
    pub login: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_user_drops_password() {
        let record = UserRecord::new("Ann", "Lee", "ann@example.com", "secret");
        let json = serde_json::to_value(record.to_public()).unwrap();

        assert_eq!(json["name"], "Ann");
        assert_eq!(json["lastName"], "Lee");
        assert_eq!(json["login"], "ann@example.com");
        assert!(json.get("password").is_none());
    }
}
