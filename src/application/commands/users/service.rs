// src/application/commands/users/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{security::PasswordHasher, time::Clock},
    domain::user::UserRepository,
};

pub struct UserCommandService {
    pub(super) repo: Arc<dyn UserRepository>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
    pub(super) clock: Arc<dyn Clock>,
}

impl UserCommandService {
    pub fn new(
        repo: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repo,
            password_hasher,
            clock,
        }
    }
}
