// src/application/commands/articles/increment_views.rs
use super::ArticleCommandService;
use crate::{
    application::{dto::ViewCountDto, error::ApplicationResult},
    domain::article::ArticleSlug,
};

pub struct IncrementViewsCommand {
    pub slug: String,
}

impl ArticleCommandService {
    pub async fn increment_views(
        &self,
        command: IncrementViewsCommand,
    ) -> ApplicationResult<ViewCountDto> {
        let slug = ArticleSlug::new(command.slug)?;
        let views = self.write_repo.increment_views(&slug).await?;
        Ok(ViewCountDto { views })
    }
}
