//! User repository backed by the JSON user store.

use std::path::PathBuf;

use crate::config::MAX_INVENTORY_ITEMS;
use crate::domain::{InventoryItem, User};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::store::{JsonStore, Record};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

impl Record for User {
    fn key(&self) -> &str {
        &self.email
    }
}

/// User repository trait for dependency injection.
///
/// Emails passed in must already be normalized. Accounts are never deleted.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait UserRepository: Send + Sync {
    /// Find user by normalized email
    fn find_by_email(&self, email: &str) -> Option<User>;

    /// Insert a new user; fails with `AlreadyExists` if the email is taken
    fn create(&self, user: User) -> AppResult<User>;

    /// Replace the inventory and/or deleted inventory as whole values
    fn replace_inventory(
        &self,
        email: &str,
        inventory: Option<Vec<InventoryItem>>,
        deleted_inventory: Option<Vec<InventoryItem>>,
    ) -> AppResult<User>;

    /// List every user
    fn list(&self) -> Vec<User>;

    /// Number of stored users
    fn count(&self) -> usize;
}

/// Concrete implementation of UserRepository over a [`JsonStore`]
pub struct UserStore {
    store: JsonStore<User>,
}

impl UserStore {
    /// Open (or start) the user store at `path`
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            store: JsonStore::open(path),
        }
    }
}

fn check_inventory_size(items: Option<&Vec<InventoryItem>>, label: &str) -> AppResult<()> {
    match items {
        Some(items) if items.len() > MAX_INVENTORY_ITEMS => Err(AppError::validation(format!(
            "{} too large (max {} items)",
            label, MAX_INVENTORY_ITEMS
        ))),
        _ => Ok(()),
    }
}

impl UserRepository for UserStore {
    fn find_by_email(&self, email: &str) -> Option<User> {
        self.store.get(email)
    }

    fn create(&self, user: User) -> AppResult<User> {
        if !self.store.insert_new(user.clone())? {
            return Err(AppError::already_exists("account"));
        }
        tracing::info!(email = %user.email, "User created");
        Ok(user)
    }

    fn replace_inventory(
        &self,
        email: &str,
        inventory: Option<Vec<InventoryItem>>,
        deleted_inventory: Option<Vec<InventoryItem>>,
    ) -> AppResult<User> {
        check_inventory_size(inventory.as_ref(), "inventory")?;
        check_inventory_size(deleted_inventory.as_ref(), "deleted inventory")?;

        self.store
            .update(email, |user: &mut User| {
                user.replace_inventory(inventory, deleted_inventory);
                Ok::<_, AppError>(())
            })?
            .ok_or_not_found("user")
    }

    fn list(&self) -> Vec<User> {
        self.store.list_all()
    }

    fn count(&self) -> usize {
        self.store.len()
    }
}
