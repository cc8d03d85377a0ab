// tests/support/mocks.rs
use alejandria_core::application::ports::time::Clock;
use alejandria_core::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleSlug, ArticleUpdate, ArticleWriteRepository,
    NewArticle,
};
use alejandria_core::domain::errors::{DomainError, DomainResult};
use alejandria_core::domain::user::{NewUser, Role, User, UserId, UserRepository, Username};
use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::sync::{
    Mutex,
    atomic::{AtomicI64, Ordering},
};

/// Deterministic clock that advances one second per call, so records created
/// in sequence carry strictly increasing timestamps.
pub struct TickingClock {
    ticks: AtomicI64,
    epoch: DateTime<Utc>,
}

impl Default for TickingClock {
    fn default() -> Self {
        Self {
            ticks: AtomicI64::new(0),
            epoch: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        }
    }
}

impl Clock for TickingClock {
    fn now(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        self.epoch + Duration::seconds(tick)
    }
}

/* ------------------------------ articles ------------------------------ */

/// Full in-memory article store honouring the same contract as the postgres
/// repository: slug uniqueness, atomic view increments, newest-first lists.
#[derive(Default)]
pub struct InMemoryArticleRepository {
    articles: Mutex<Vec<Article>>,
    next_id: AtomicI64,
}

impl InMemoryArticleRepository {
    fn newest_first(mut articles: Vec<Article>) -> Vec<Article> {
        articles.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then(i64::from(b.id).cmp(&i64::from(a.id)))
        });
        articles
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut articles = self.articles.lock().unwrap();
        if articles.iter().any(|a| a.slug == article.slug) {
            return Err(DomainError::Conflict(
                "an article with this title already exists".into(),
            ));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let stored = Article {
            id: ArticleId::new(id)?,
            title: article.title,
            slug: article.slug,
            description: article.description,
            content: article.content,
            category: article.category,
            author: article.author,
            image: article.image,
            status: article.status,
            views: 0,
            created_at: article.created_at,
            updated_at: article.updated_at,
        };
        articles.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut articles = self.articles.lock().unwrap();

        if let Some(slug) = &update.slug {
            if articles.iter().any(|a| a.slug == *slug && a.id != update.id) {
                return Err(DomainError::Conflict(
                    "an article with this title already exists".into(),
                ));
            }
        }

        let article = articles
            .iter_mut()
            .find(|a| a.id == update.id)
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        if let Some(title) = update.title {
            article.title = title;
        }
        if let Some(slug) = update.slug {
            article.slug = slug;
        }
        if let Some(description) = update.description {
            article.description = description;
        }
        if let Some(content) = update.content {
            article.content = content;
        }
        if let Some(category) = update.category {
            article.category = category;
        }
        if let Some(author) = update.author {
            article.author = author;
        }
        if let Some(image) = update.image {
            article.image = Some(image);
        }
        if let Some(status) = update.status {
            article.status = status;
        }
        article.updated_at = update.updated_at;

        Ok(article.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<Article> {
        let mut articles = self.articles.lock().unwrap();
        let index = articles
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        Ok(articles.remove(index))
    }

    async fn increment_views(&self, slug: &ArticleSlug) -> DomainResult<i64> {
        let mut articles = self.articles.lock().unwrap();
        let article = articles
            .iter_mut()
            .find(|a| a.slug == *slug)
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        article.record_view();
        Ok(article.views)
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let articles = self.articles.lock().unwrap();
        Ok(articles.iter().find(|a| a.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let articles = self.articles.lock().unwrap();
        Ok(articles.iter().find(|a| a.slug == *slug).cloned())
    }

    async fn list(&self, published_only: bool) -> DomainResult<Vec<Article>> {
        let articles = self.articles.lock().unwrap();
        let selected = articles
            .iter()
            .filter(|a| !published_only || a.is_published())
            .cloned()
            .collect();
        Ok(Self::newest_first(selected))
    }

    async fn search(&self, needle: &str, published_only: bool) -> DomainResult<Vec<Article>> {
        let articles = self.articles.lock().unwrap();
        let selected = articles
            .iter()
            .filter(|a| !published_only || a.is_published())
            .filter(|a| a.matches_query(needle))
            .cloned()
            .collect();
        Ok(Self::newest_first(selected))
    }
}

/* ------------------------------- users -------------------------------- */

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
    next_id: AtomicI64,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: NewUser) -> DomainResult<User> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.username == user.username) {
            return Err(DomainError::Conflict("username already exists".into()));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let stored = User {
            id: UserId::new(id)?,
            username: user.username,
            password_hash: user.password_hash,
            role: user.role,
            is_active: user.is_active,
            created_at: user.created_at,
        };
        users.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.username == *username).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().cloned().collect())
    }

    async fn update_role(&self, id: UserId, role: Role) -> DomainResult<User> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;
        user.set_role(role);
        Ok(user.clone())
    }
}
