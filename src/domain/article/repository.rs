use crate::domain::article::entity::Article;
use crate::domain::article::value_objects::ArticleSlug;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    /// Persists the whole batch or nothing.
    async fn save_all(&self, articles: &[Article]) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn count(&self) -> DomainResult<u64>;
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>>;
    /// Newest first by `added_at`.
    async fn list_latest(&self) -> DomainResult<Vec<Article>>;
}
