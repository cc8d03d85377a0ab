// src/application/commands/articles/update.rs
use super::{ArticleCommandService, require_non_empty};
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleId, ArticleStatus, ArticleTitle, ArticleUpdate, ContentSection},
};

pub struct UpdateArticleCommand {
    pub id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub author: Option<String>,
    pub status: Option<String>,
    pub content: Option<Vec<ContentSection>>,
    pub image: Option<String>,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(command.id)?;
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let mut update = ArticleUpdate::new(id, self.clock.now());

        if let Some(title) = command.title {
            require_non_empty("title", &title)?;
            let title = ArticleTitle::new(title)?;
            // Slug stays consistent with the most recently saved title.
            if title != article.title {
                let slug = self.slug_service.slug_for_title(&title, Some(id)).await?;
                update = update.with_title(title, slug);
            }
        }

        if let Some(description) = command.description {
            require_non_empty("description", &description)?;
            update = update.with_description(description);
        }

        if let Some(category) = command.category {
            require_non_empty("category", &category)?;
            update = update.with_category(category);
        }

        if let Some(author) = command.author {
            require_non_empty("author", &author)?;
            update = update.with_author(author);
        }

        if let Some(content) = command.content {
            update = update.with_content(content);
        }

        if let Some(image) = command.image {
            update = update.with_image(image);
        }

        if let Some(status) = command.status {
            update = update.with_status(status.parse::<ArticleStatus>()?);
        }

        if update.is_empty() {
            return Ok(article.into());
        }

        let updated = self.write_repo.update(update).await?;
        tracing::info!(slug = %updated.slug, "article updated");
        Ok(updated.into())
    }
}
