// src/domain/article/services/mod.rs
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::article::repository::ArticleReadRepository;
use crate::domain::article::value_objects::{ArticleId, ArticleSlug, ArticleTitle};
use crate::domain::errors::{DomainError, DomainResult};

/// Domain service owning slug derivation for articles. A title whose slug
/// collides with a different article is rejected outright; there is no
/// suffixing fallback, the caller has to pick another title.
pub struct ArticleSlugService {
    read_repo: Arc<dyn ArticleReadRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl ArticleSlugService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        generator: Arc<dyn SlugGenerator>,
    ) -> Self {
        Self {
            read_repo,
            generator,
        }
    }

    pub async fn slug_for_title(
        &self,
        title: &ArticleTitle,
        ignore_id: Option<ArticleId>,
    ) -> DomainResult<ArticleSlug> {
        let derived = self.generator.slugify(title.as_str());
        if derived.is_empty() {
            return Err(DomainError::Validation(
                "title must contain at least one letter or digit".into(),
            ));
        }

        let slug = ArticleSlug::new(derived)?;
        match self.read_repo.find_by_slug(&slug).await? {
            Some(existing) if ignore_id != Some(existing.id) => Err(DomainError::Conflict(
                "an article with this title already exists".into(),
            )),
            _ => Ok(slug),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::entity::Article;
    use crate::domain::article::value_objects::ArticleStatus;
    use async_trait::async_trait;
    use chrono::Utc;

    struct LowercaseSlugger;

    impl SlugGenerator for LowercaseSlugger {
        fn slugify(&self, input: &str) -> String {
            input
                .to_lowercase()
                .split_whitespace()
                .collect::<Vec<_>>()
                .join("-")
        }
    }

    struct OneArticleRepo {
        existing: Article,
    }

    #[async_trait]
    impl ArticleReadRepository for OneArticleRepo {
        async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
            Ok((self.existing.id == id).then(|| self.existing.clone()))
        }

        async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
            Ok((self.existing.slug == *slug).then(|| self.existing.clone()))
        }

        async fn list(&self, _published_only: bool) -> DomainResult<Vec<Article>> {
            Ok(vec![self.existing.clone()])
        }

        async fn search(&self, _needle: &str, _published_only: bool) -> DomainResult<Vec<Article>> {
            Ok(vec![])
        }
    }

    fn service_with_existing(slug: &str) -> ArticleSlugService {
        let existing = Article {
            id: ArticleId::new(1).unwrap(),
            title: ArticleTitle::new("Existing").unwrap(),
            slug: ArticleSlug::new(slug).unwrap(),
            description: "d".into(),
            content: vec![],
            category: "c".into(),
            author: "a".into(),
            image: None,
            status: ArticleStatus::Published,
            views: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        ArticleSlugService::new(Arc::new(OneArticleRepo { existing }), Arc::new(LowercaseSlugger))
    }

    #[tokio::test]
    async fn colliding_title_is_a_conflict() {
        let service = service_with_existing("hello-world");
        let title = ArticleTitle::new("Hello World").unwrap();
        let err = service.slug_for_title(&title, None).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn own_slug_is_not_a_conflict_on_update() {
        let service = service_with_existing("hello-world");
        let title = ArticleTitle::new("Hello World").unwrap();
        let slug = service
            .slug_for_title(&title, Some(ArticleId::new(1).unwrap()))
            .await
            .unwrap();
        assert_eq!(slug.as_str(), "hello-world");
    }

    #[tokio::test]
    async fn fresh_title_passes_through() {
        let service = service_with_existing("hello-world");
        let title = ArticleTitle::new("Something Else").unwrap();
        let slug = service.slug_for_title(&title, None).await.unwrap();
        assert_eq!(slug.as_str(), "something-else");
    }

    #[tokio::test]
    async fn symbol_only_title_fails_validation() {
        let service = service_with_existing("hello-world");
        let title = ArticleTitle::new("!!!").unwrap();
        let err = service.slug_for_title(&title, None).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
