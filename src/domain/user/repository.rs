use crate::domain::errors::DomainResult;
use crate::domain::user::{entity::User, value_objects::Username};
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persists the whole batch or nothing.
    async fn save_all(&self, users: &[User]) -> DomainResult<()>;

    async fn count(&self) -> DomainResult<u64>;

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>>;
}
