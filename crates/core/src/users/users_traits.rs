use async_trait::async_trait;

use crate::errors::Result;
use crate::users::users_model::{NewUser, User};

/// Trait for user repository operations
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    async fn insert_user(&self, user: User) -> Result<User>;
    async fn find_user(&self, user_id: &str) -> Result<Option<User>>;
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>>;
    /// Flip the onboarding flag; `None` when the user does not exist.
    async fn mark_onboarding_complete(&self, user_id: &str) -> Result<Option<User>>;
}

/// Trait for user service operations
#[async_trait]
pub trait UserServiceTrait: Send + Sync {
    async fn register_user(&self, new_user: NewUser) -> Result<User>;
    async fn complete_onboarding(&self, user_id: &str) -> Result<User>;
    async fn get_user(&self, user_id: &str) -> Result<User>;
}
