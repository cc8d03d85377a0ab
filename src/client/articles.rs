// src/client/articles.rs
use super::{ArticleView, ClientError, ClientResult};
use crate::application::dto::ArticleDto;
use crate::domain::article::{ArticleStatus, ContentSection};
use serde::Serialize;

/// Outgoing article fields in the store's naming. Used for both create and
/// update; `None` fields are omitted from the body.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ArticlePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ArticleStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<ContentSection>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

pub struct ArticleClient {
    base_url: String,
    http: reqwest::Client,
}

impl ArticleClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn read_articles(response: reqwest::Response) -> ClientResult<Vec<ArticleView>> {
        if !response.status().is_success() {
            return Err(ClientError::from_response(response).await);
        }
        let dtos: Vec<ArticleDto> = response.json().await?;
        Ok(dtos.into_iter().map(Into::into).collect())
    }

    async fn read_article(response: reqwest::Response) -> ClientResult<ArticleView> {
        if !response.status().is_success() {
            return Err(ClientError::from_response(response).await);
        }
        let dto: ArticleDto = response.json().await?;
        Ok(dto.into())
    }

    pub async fn list(&self) -> ClientResult<Vec<ArticleView>> {
        let response = self.http.get(self.url("/articles")).send().await?;
        Self::read_articles(response).await
    }

    pub async fn list_published(&self) -> ClientResult<Vec<ArticleView>> {
        let response = self.http.get(self.url("/articles/published")).send().await?;
        Self::read_articles(response).await
    }

    pub async fn search(&self, query: &str) -> ClientResult<Vec<ArticleView>> {
        let response = self
            .http
            .get(self.url("/articles/search"))
            .query(&[("q", query)])
            .send()
            .await?;
        Self::read_articles(response).await
    }

    /// `Ok(None)` when the slug does not resolve to a published article.
    pub async fn get_by_slug(&self, slug: &str) -> ClientResult<Option<ArticleView>> {
        let response = self
            .http
            .get(self.url(&format!("/articles/name/{slug}")))
            .send()
            .await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Self::read_article(response).await.map(Some)
    }

    pub async fn get_by_id(&self, id: i64) -> ClientResult<ArticleView> {
        let response = self
            .http
            .get(self.url(&format!("/articles/{id}")))
            .send()
            .await?;
        Self::read_article(response).await
    }

    pub async fn create(&self, payload: &ArticlePayload) -> ClientResult<ArticleView> {
        let response = self
            .http
            .post(self.url("/articles"))
            .json(payload)
            .send()
            .await?;
        Self::read_article(response).await
    }

    pub async fn update(&self, id: i64, payload: &ArticlePayload) -> ClientResult<ArticleView> {
        let response = self
            .http
            .put(self.url(&format!("/articles/{id}")))
            .json(payload)
            .send()
            .await?;
        Self::read_article(response).await
    }

    /// Returns the deleted record.
    pub async fn delete(&self, id: i64) -> ClientResult<ArticleView> {
        let response = self
            .http
            .delete(self.url(&format!("/articles/{id}")))
            .send()
            .await?;
        Self::read_article(response).await
    }

    /// Best effort: a reader losing one count is preferable to a reader
    /// seeing an error, so failures are logged and swallowed.
    pub async fn increment_views(&self, slug: &str) {
        let result = self
            .http
            .post(self.url(&format!("/articles/increment-views/{slug}")))
            .send()
            .await;

        match result {
            Ok(response) if !response.status().is_success() => {
                tracing::debug!(slug, status = %response.status(), "view increment rejected");
            }
            Err(err) => {
                tracing::debug!(slug, error = %err, "view increment failed");
            }
            Ok(_) => {}
        }
    }
}
