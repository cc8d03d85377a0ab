// src/client/view.rs
use crate::application::dto::ArticleDto;
use crate::domain::article::{ArticleStatus, ContentSection};

/// Display model consumed by the presentation layer: a friendly
/// `publish_date` string instead of a timestamp, and defaults filled in for
/// fields older records may lack.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleView {
    pub id: i64,
    pub slug: String,
    pub title: String,
    pub author: String,
    pub category: String,
    pub status: ArticleStatus,
    pub description: String,
    pub publish_date: String,
    pub views: i64,
    pub content: Vec<ContentSection>,
    pub image: Option<String>,
}

impl From<ArticleDto> for ArticleView {
    fn from(dto: ArticleDto) -> Self {
        Self {
            id: dto.id,
            slug: dto.slug,
            title: dto.title,
            author: dto.author,
            category: dto.category,
            status: dto.status,
            description: dto.description,
            publish_date: dto.created_at.format("%Y-%m-%d").to_string(),
            views: dto.views,
            content: dto.content,
            image: dto.image,
        }
    }
}
