use tracing::info;

use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        user::{NewUser, PasswordHash, User, Username},
        validation::{FieldErrors, FieldResultExt, combine},
    },
};

pub struct RegisterUserCommand {
    pub username: String,
    pub password: String,
}

impl UserCommandService {
    pub async fn register(&self, command: RegisterUserCommand) -> ApplicationResult<UserDto> {
        let username = Username::new(command.username).for_field("username");
        let (username, ()) =
            combine(username, validate_password(&command.password)).map_err(ApplicationError::from)?;

        self.ensure_username_available(&username).await?;

        let user = self
            .create_and_insert_user(username, &command.password)
            .await?;

        info!(user_id = %user.id, username = %user.username, "user registered");
        Ok(user.into())
    }

    async fn ensure_username_available(&self, username: &Username) -> ApplicationResult<()> {
        if self.user_repo.find_by_username(username).await?.is_some() {
            return Err(FieldErrors::single("username", "a user with that username already exists").into());
        }

        Ok(())
    }

    async fn create_and_insert_user(
        &self,
        username: Username,
        password: &str,
    ) -> ApplicationResult<User> {
        let hashed = self.password_hasher.hash(password).await?;
        let password_hash = PasswordHash::new(hashed)?;

        let created_at = self.clock.now();
        let new_user = NewUser::new(username, password_hash, created_at);
        let user = self.user_repo.insert(new_user).await?;

        Ok(user)
    }
}
