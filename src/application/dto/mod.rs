pub mod articles;
pub mod users;

pub use articles::{ArticleDto, ViewCountDto};
pub use users::UserDto;
