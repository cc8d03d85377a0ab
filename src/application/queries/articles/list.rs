use super::ArticleQueryService;
use crate::application::{dto::ArticleDto, error::ApplicationResult};

impl ArticleQueryService {
    /// Every article regardless of status, newest-created first. Management
    /// path; the dashboard needs drafts too.
    pub async fn list_articles(&self) -> ApplicationResult<Vec<ArticleDto>> {
        let articles = self.read_repo.list(false).await?;
        Ok(articles.into_iter().map(Into::into).collect())
    }

    /// Public listing: published only, newest-created first.
    pub async fn list_published(&self) -> ApplicationResult<Vec<ArticleDto>> {
        let articles = self.read_repo.list(true).await?;
        Ok(articles.into_iter().map(Into::into).collect())
    }
}
