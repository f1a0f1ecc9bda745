use crate::domain::user::UserRecord;
use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn find_by_login(&self, login: &str) -> Result<Option<UserRecord>>;
    async fn insert(&self, user: UserRecord) -> Result<()>;
}
