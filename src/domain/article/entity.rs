// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleId, ArticleSlug, ArticleStatus, ArticleTitle, ContentSection,
};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub description: String,
    pub content: Vec<ContentSection>,
    pub category: String,
    pub author: String,
    pub image: Option<String>,
    pub status: ArticleStatus,
    pub views: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    pub fn is_published(&self) -> bool {
        self.status.is_published()
    }

    pub fn record_view(&mut self) {
        self.views += 1;
    }

    /// Case-insensitive substring match across every searchable field,
    /// including each content section's heading and paragraph.
    pub fn matches_query(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        let hit = |text: &str| text.to_lowercase().contains(&needle);

        hit(self.title.as_str())
            || hit(&self.description)
            || hit(&self.category)
            || hit(&self.author)
            || self.content.iter().any(|section| {
                section.heading.as_deref().is_some_and(hit)
                    || section.paragraph.as_deref().is_some_and(hit)
            })
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub description: String,
    pub content: Vec<ContentSection>,
    pub category: String,
    pub author: String,
    pub image: Option<String>,
    pub status: ArticleStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial field replacement. `views` is deliberately absent: the counter
/// only moves through the atomic increment operation.
#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: Option<ArticleTitle>,
    pub slug: Option<ArticleSlug>,
    pub description: Option<String>,
    pub content: Option<Vec<ContentSection>>,
    pub category: Option<String>,
    pub author: Option<String>,
    pub image: Option<String>,
    pub status: Option<ArticleStatus>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleUpdate {
    pub fn new(id: ArticleId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            slug: None,
            description: None,
            content: None,
            category: None,
            author: None,
            image: None,
            status: None,
            updated_at,
        }
    }

    pub fn with_title(mut self, title: ArticleTitle, slug: ArticleSlug) -> Self {
        self.title = Some(title);
        self.slug = Some(slug);
        self
    }

    pub fn with_description(mut self, description: String) -> Self {
        self.description = Some(description);
        self
    }

    pub fn with_content(mut self, content: Vec<ContentSection>) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_category(mut self, category: String) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_author(mut self, author: String) -> Self {
        self.author = Some(author);
        self
    }

    pub fn with_image(mut self, image: String) -> Self {
        self.image = Some(image);
        self
    }

    pub fn with_status(mut self, status: ArticleStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.slug.is_none()
            && self.description.is_none()
            && self.content.is_none()
            && self.category.is_none()
            && self.author.is_none()
            && self.image.is_none()
            && self.status.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_article() -> Article {
        Article {
            id: ArticleId::new(1).unwrap(),
            title: ArticleTitle::new("OpenAI Launches GPT-5").unwrap(),
            slug: ArticleSlug::new("openai-launches-gpt5").unwrap(),
            description: "A look at the release".into(),
            content: vec![ContentSection {
                heading: Some("Background".into()),
                paragraph: Some("Large models keep getting larger.".into()),
            }],
            category: "Technology".into(),
            author: "Ada".into(),
            image: None,
            status: ArticleStatus::Published,
            views: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn record_view_increments_by_one() {
        let mut article = sample_article();
        article.record_view();
        assert_eq!(article.views, 1);
        article.record_view();
        assert_eq!(article.views, 2);
    }

    #[test]
    fn matches_query_is_case_insensitive() {
        let article = sample_article();
        assert!(article.matches_query("gpt"));
        assert!(article.matches_query("TECHNOLOGY"));
        assert!(article.matches_query("ada"));
    }

    #[test]
    fn matches_query_searches_content_sections() {
        let article = sample_article();
        assert!(article.matches_query("background"));
        assert!(article.matches_query("larger"));
        assert!(!article.matches_query("absent"));
    }

    #[test]
    fn empty_update_reports_empty() {
        let update = ArticleUpdate::new(ArticleId::new(1).unwrap(), Utc::now());
        assert!(update.is_empty());
        let update = update.with_category("Science".into());
        assert!(!update.is_empty());
    }
}
