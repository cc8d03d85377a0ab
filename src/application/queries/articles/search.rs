use super::ArticleQueryService;
use crate::application::{
    dto::ArticleDto,
    error::{ApplicationError, ApplicationResult},
};

pub struct SearchArticlesQuery {
    pub query: Option<String>,
}

impl ArticleQueryService {
    /// Public search over published articles, newest-created first.
    pub async fn search_articles(
        &self,
        query: SearchArticlesQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let needle = query
            .query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .ok_or_else(|| ApplicationError::validation("search query is required"))?;

        let articles = self.read_repo.search(needle, true).await?;
        Ok(articles.into_iter().map(Into::into).collect())
    }
}
