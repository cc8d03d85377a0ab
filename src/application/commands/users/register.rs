// src/application/commands/users/register.rs
use super::UserCommandService;
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{NewUser, PasswordHash, Role, Username},
};

pub struct RegisterUserCommand {
    pub username: String,
    pub password: String,
    pub role: Option<String>,
}

impl UserCommandService {
    pub async fn register_user(&self, command: RegisterUserCommand) -> ApplicationResult<UserDto> {
        if command.password.trim().is_empty() {
            return Err(ApplicationError::validation("password is required"));
        }

        let role = match command.role {
            Some(raw) => raw.parse::<Role>()?,
            None => Role::default(),
        };

        let username = Username::new(command.username)?;
        let hashed = self.password_hasher.hash(&command.password).await?;
        let password_hash = PasswordHash::new(hashed)?;

        let new_user = NewUser {
            username,
            password_hash,
            role,
            is_active: true,
            created_at: self.clock.now(),
        };

        let created = self.repo.insert(new_user).await?;
        tracing::info!(username = %created.username, "user registered");
        Ok(created.into())
    }
}
