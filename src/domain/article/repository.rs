use crate::domain::article::entity::{Article, ArticleUpdate, NewArticle};
use crate::domain::article::value_objects::{ArticleId, ArticleSlug};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    /// Fails with `DomainError::Conflict` when the slug collides with a
    /// different article.
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    /// Returns the deleted record.
    async fn delete(&self, id: ArticleId) -> DomainResult<Article>;
    /// Atomic +1; returns the new count, `DomainError::NotFound` if the slug
    /// does not exist.
    async fn increment_views(&self, slug: &ArticleSlug) -> DomainResult<i64>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>>;
    /// Newest-created first.
    async fn list(&self, published_only: bool) -> DomainResult<Vec<Article>>;
    /// Case-insensitive substring search, newest-created first.
    async fn search(&self, needle: &str, published_only: bool) -> DomainResult<Vec<Article>>;
}
