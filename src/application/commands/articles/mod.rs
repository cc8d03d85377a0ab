mod create;
mod delete;
mod increment_views;
mod service;
mod update;

pub use create::CreateArticleCommand;
pub use delete::DeleteArticleCommand;
pub use increment_views::IncrementViewsCommand;
pub use service::ArticleCommandService;
pub use update::UpdateArticleCommand;

use crate::application::error::{ApplicationError, ApplicationResult};

/// Required-field presence check shared by create and update.
fn require_non_empty(field: &str, value: &str) -> ApplicationResult<()> {
    if value.trim().is_empty() {
        Err(ApplicationError::validation(format!(
            "{field} is required"
        )))
    } else {
        Ok(())
    }
}
