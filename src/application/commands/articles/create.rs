// src/application/commands/articles/create.rs
use super::{ArticleCommandService, require_non_empty};
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::{ArticleStatus, ArticleTitle, ContentSection, NewArticle},
};

pub struct CreateArticleCommand {
    pub title: String,
    pub description: String,
    pub category: String,
    pub author: String,
    pub status: Option<String>,
    pub content: Vec<ContentSection>,
    pub image: Option<String>,
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        require_non_empty("title", &command.title)?;
        require_non_empty("description", &command.description)?;
        require_non_empty("category", &command.category)?;
        require_non_empty("author", &command.author)?;

        let status = match command.status {
            Some(raw) => raw.parse::<ArticleStatus>()?,
            None => ArticleStatus::default(),
        };

        let title = ArticleTitle::new(command.title)?;
        let slug = self.slug_service.slug_for_title(&title, None).await?;
        let now = self.clock.now();

        let new_article = NewArticle {
            title,
            slug,
            description: command.description,
            content: command.content,
            category: command.category,
            author: command.author,
            image: command.image,
            status,
            created_at: now,
            updated_at: now,
        };

        let created = self.write_repo.insert(new_article).await?;
        tracing::info!(slug = %created.slug, "article created");
        Ok(created.into())
    }
}
