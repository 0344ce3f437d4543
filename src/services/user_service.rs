//! User service - Profile and inventory use cases.

use async_trait::async_trait;
use std::sync::Arc;

use super::blocking::run_blocking;
use crate::domain::{InventoryItem, User, UserInventory};
use crate::errors::{AppResult, OptionExt};
use crate::infra::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Get user by normalized email
    async fn get_user(&self, email: String) -> AppResult<User>;

    /// Replace inventory and/or deleted inventory (at most 1000 items each)
    async fn update_inventory(
        &self,
        email: String,
        inventory: Option<Vec<InventoryItem>>,
        deleted_inventory: Option<Vec<InventoryItem>>,
    ) -> AppResult<User>;

    /// Every user's inventory, without credentials
    async fn list_inventories(&self) -> AppResult<Vec<UserInventory>>;
}

/// Concrete implementation of UserService over the user repository.
pub struct UserManager {
    users: Arc<dyn UserRepository>,
}

impl UserManager {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn get_user(&self, email: String) -> AppResult<User> {
        let users = Arc::clone(&self.users);
        run_blocking(move || users.find_by_email(&email).ok_or_not_found("user")).await
    }

    async fn update_inventory(
        &self,
        email: String,
        inventory: Option<Vec<InventoryItem>>,
        deleted_inventory: Option<Vec<InventoryItem>>,
    ) -> AppResult<User> {
        let users = Arc::clone(&self.users);
        run_blocking(move || users.replace_inventory(&email, inventory, deleted_inventory)).await
    }

    async fn list_inventories(&self) -> AppResult<Vec<UserInventory>> {
        let users = Arc::clone(&self.users);
        run_blocking(move || {
            let mut users = users.list();
            users.sort_by(|a, b| a.email.cmp(&b.email));
            Ok(users.into_iter().map(UserInventory::from).collect())
        })
        .await
    }
}
