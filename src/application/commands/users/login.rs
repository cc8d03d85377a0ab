// src/application/commands/users/login.rs
use super::UserCommandService;
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::Username,
};

pub struct LoginUserCommand {
    pub username: String,
    pub password: String,
}

impl UserCommandService {
    /// Verifies credentials and returns the user record. Unknown usernames
    /// and bad passwords are indistinguishable to the caller.
    pub async fn login_user(&self, command: LoginUserCommand) -> ApplicationResult<UserDto> {
        let username = Username::new(command.username)?;
        let user = self
            .repo
            .find_by_username(&username)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("invalid credentials"))?;

        if !user.is_active {
            return Err(ApplicationError::unauthorized("invalid credentials"));
        }

        self.password_hasher
            .verify(&command.password, user.password_hash.as_str())
            .await?;

        Ok(user.into())
    }
}
