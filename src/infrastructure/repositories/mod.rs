mod error;
mod postgres_article;
mod postgres_user;

pub use error::map_sqlx;
pub use postgres_article::PostgresArticleRepository;
pub use postgres_user::PostgresUserRepository;
