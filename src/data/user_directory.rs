use crate::data::mock_users::mock_users;
use crate::domain::repository::UserDirectory;
use crate::domain::user::UserRecord;
use crate::infrastructure::security::PasswordVerifier;
use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument, trace};

#[derive(Clone)]
pub struct InMemoryUserDirectory {
    storage: Arc<RwLock<HashMap<String, UserRecord>>>,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self {
            storage: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub fn from_records(records: impl IntoIterator<Item = UserRecord>) -> Self {
        let storage = records
            .into_iter()
            .map(|record| (record.login.clone(), record))
            .collect();
        Self {
            storage: Arc::new(RwLock::new(storage)),
        }
    }

    /// Loads the mock users, storing each password the way `verifier` expects
    /// to find it.
    #[instrument(skip(verifier), fields(scheme = %verifier.scheme()))]
    pub fn seeded(verifier: &dyn PasswordVerifier) -> Result<Self> {
        let records = mock_users()
            .into_iter()
            .map(|mut record| -> Result<UserRecord> {
                record.password = verifier.hash(&record.password)?;
                Ok(record)
            })
            .collect::<Result<Vec<_>>>()?;

        info!(users = records.len(), "Seeded user directory");
        Ok(Self::from_records(records))
    }

    pub async fn user_count(&self) -> usize {
        self.storage.read().await.len()
    }
}

impl Default for InMemoryUserDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    #[instrument(skip(self))]
    async fn find_by_login(&self, login: &str) -> Result<Option<UserRecord>> {
        trace!("Acquiring read lock for user directory");
        let storage = self.storage.read().await;
        let user = storage.get(login).cloned();
        match &user {
            Some(u) => debug!(login = %u.login, "User found in directory"),
            None => trace!(login = login, "User not found in directory"),
        }
        Ok(user)
    }

    #[instrument(skip(self, user), fields(login = %user.login))]
    async fn insert(&self, user: UserRecord) -> Result<()> {
        trace!("Acquiring write lock for user directory");
        let mut storage = self.storage.write().await;
        storage.insert(user.login.clone(), user);
        debug!("User stored in directory");
        Ok(())
    }
}
