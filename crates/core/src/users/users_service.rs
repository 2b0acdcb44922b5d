use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use log::debug;

use crate::errors::{Error, Result, ValidationError};
use crate::users::users_model::{Gender, NewUser, User};
use crate::users::users_traits::{UserRepositoryTrait, UserServiceTrait};

/// Service for managing users
pub struct UserService<R: UserRepositoryTrait> {
    user_repo: Arc<R>,
}

impl<R: UserRepositoryTrait> UserService<R> {
    /// Creates a new UserService instance
    pub fn new(user_repo: Arc<R>) -> Self {
        UserService { user_repo }
    }
}

#[async_trait]
impl<R: UserRepositoryTrait> UserServiceTrait for UserService<R> {
    /// Register the profile row for a freshly authenticated user.
    async fn register_user(&self, new_user: NewUser) -> Result<User> {
        let user_id = new_user.user_id.trim();
        let first_name = new_user.first_name.trim();
        let last_name = new_user.last_name.trim();
        let email = new_user.email.trim();

        if user_id.is_empty() || first_name.is_empty() || last_name.is_empty() || email.is_empty() {
            return Err(ValidationError::InvalidInput(
                "Todos los campos son obligatorios (userId, firstName, lastName, email)"
                    .to_string(),
            )
            .into());
        }

        let gender = match new_user.gender.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(Gender::from_input(raw).ok_or_else(|| {
                ValidationError::InvalidInput(format!("Valor de género no válido: {}", raw))
            })?),
        };

        if self.user_repo.find_user(user_id).await?.is_some() {
            return Err(Error::Conflict("El usuario ya existe".to_string()));
        }
        if self.user_repo.find_user_by_email(email).await?.is_some() {
            return Err(Error::Conflict("El email ya está registrado".to_string()));
        }

        debug!("Registering user {}", user_id);

        let user = User {
            id: user_id.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            birth_date: new_user.birth_date,
            gender,
            has_completed_onboarding: false,
            created_at: Utc::now(),
        };

        self.user_repo.insert_user(user).await
    }

    /// Mark the onboarding wizard as finished for a user.
    ///
    /// Safe to call again for a user who already finished; the flag just
    /// stays set.
    async fn complete_onboarding(&self, user_id: &str) -> Result<User> {
        debug!("Completing onboarding for {}", user_id);

        self.user_repo
            .mark_onboarding_complete(user_id)
            .await?
            .ok_or_else(|| Error::NotFound("Usuario no encontrado".to_string()))
    }

    async fn get_user(&self, user_id: &str) -> Result<User> {
        self.user_repo
            .find_user(user_id)
            .await?
            .ok_or_else(|| Error::NotFound("Usuario no encontrado".to_string()))
    }
}
