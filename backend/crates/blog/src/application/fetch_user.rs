//! Fetch User Use Case
//!
//! User fetch does not eager-load relations.

use std::sync::Arc;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::{BlogError, BlogResult};
use kernel::id::UserId;

/// Fetch user use case
pub struct FetchUserUseCase<U>
where
    U: UserRepository,
{
    users: Arc<U>,
}

impl<U> FetchUserUseCase<U>
where
    U: UserRepository,
{
    pub fn new(users: Arc<U>) -> Self {
        Self { users }
    }

    pub async fn execute(&self, id: &UserId) -> BlogResult<User> {
        self.users.find_by_id(id).await?.ok_or(BlogError::NotFound)
    }
}
