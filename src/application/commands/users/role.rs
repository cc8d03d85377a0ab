// src/application/commands/users/role.rs
use super::UserCommandService;
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{Role, UserId},
};

pub struct UpdateUserRoleCommand {
    pub id: i64,
    pub role: Option<String>,
}

impl UserCommandService {
    pub async fn update_user_role(
        &self,
        command: UpdateUserRoleCommand,
    ) -> ApplicationResult<UserDto> {
        let role = command
            .role
            .ok_or_else(|| ApplicationError::validation("role is required"))?
            .parse::<Role>()?;

        let id = UserId::new(command.id)?;
        let updated = self.repo.update_role(id, role).await?;
        tracing::info!(username = %updated.username, role = %updated.role, "user role updated");
        Ok(updated.into())
    }
}
