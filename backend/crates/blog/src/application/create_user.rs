//! Create User Use Case
//!
//! The one entity operation with real logic: the plaintext password is
//! hashed before anything reaches the store.

use std::sync::Arc;

use crate::domain::entity::user::{User, UserDraft};
use crate::domain::repository::UserRepository;
use crate::error::BlogResult;
use kernel::id::UserId;
use platform::password::RawPassword;

/// Create user input
pub struct CreateUserInput {
    /// Bound id turns the save into an update
    pub id: Option<UserId>,
    pub username: String,
    pub password: String,
}

/// Create user use case
pub struct CreateUserUseCase<U>
where
    U: UserRepository,
{
    users: Arc<U>,
}

impl<U> CreateUserUseCase<U>
where
    U: UserRepository,
{
    pub fn new(users: Arc<U>) -> Self {
        Self { users }
    }

    pub async fn execute(&self, input: CreateUserInput) -> BlogResult<User> {
        let raw = RawPassword::new(input.password)?;
        let password_hash = raw.hash()?;

        let draft = UserDraft {
            id: input.id,
            username: input.username,
            password_hash: password_hash.as_str().to_string(),
        };

        let user = self.users.save(&draft).await?;

        tracing::info!(user_id = %user.id, username = %user.username, "User saved");

        Ok(user)
    }
}
