use crate::domain::article::{Article, ArticleStatus, ContentSection};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub description: String,
    #[serde(default)]
    pub content: Vec<ContentSection>,
    pub category: String,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub status: ArticleStatus,
    #[serde(default)]
    pub views: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into(),
            slug: article.slug.into(),
            description: article.description,
            content: article.content,
            category: article.category,
            author: article.author,
            image: article.image,
            status: article.status,
            views: article.views,
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

/// Response body of the view-increment endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewCountDto {
    pub views: i64,
}
