//! Authentication service - Signup and credential checks.

use async_trait::async_trait;
use std::sync::Arc;

use super::blocking::run_blocking;
use crate::domain::{Password, User};
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

/// Authentication service trait for dependency injection.
///
/// Inputs are expected normalized (trimmed, lower-case email) and validated.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Create an account; fails with `AlreadyExists` for a taken email
    async fn register(&self, name: String, email: String, password: String) -> AppResult<User>;

    /// Check credentials and return the account
    async fn login(&self, email: String, password: String) -> AppResult<User>;
}

/// Concrete implementation of AuthService over the user repository.
pub struct Authenticator {
    users: Arc<dyn UserRepository>,
}

impl Authenticator {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn register(&self, name: String, email: String, password: String) -> AppResult<User> {
        let users = Arc::clone(&self.users);

        run_blocking(move || {
            // Skip the hashing cost for an obvious duplicate; create() re-checks under the lock
            if users.find_by_email(&email).is_some() {
                return Err(AppError::already_exists("account"));
            }

            let hashed_password = Password::new(&password)?.into_string();
            users.create(User::new(name, email, hashed_password))
        })
        .await
    }

    async fn login(&self, email: String, password: String) -> AppResult<User> {
        let users = Arc::clone(&self.users);

        run_blocking(move || {
            let user = users.find_by_email(&email);

            // Verify against a dummy hash when the account is missing so both
            // failure paths cost the same.
            let stored = user
                .as_ref()
                .map(|u| Password::from_hash(u.hashed_password.as_str()))
                .unwrap_or_else(Password::dummy);
            let password_valid = stored.verify(&password);

            match user {
                Some(user) if password_valid => Ok(user),
                _ => Err(AppError::InvalidCredentials),
            }
        })
        .await
    }
}
