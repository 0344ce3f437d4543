//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Normalize an email for use as a user key (trimmed, lower-case).
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// One entry of a user's inventory.
///
/// Accepts either a bare string (the item name) or a full object. An item
/// carrying nothing but its name is written back as a bare string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(from = "InventoryItemRepr", into = "InventoryItemRepr")]
pub struct InventoryItem {
    /// Item name
    #[schema(example = "Laptop")]
    pub name: String,
    /// Barcode (UPC), when the item was scanned
    #[schema(example = "012345678905")]
    pub upc: Option<String>,
    pub brand: Option<String>,
    pub category: Option<String>,
    #[schema(example = 1)]
    pub quantity: u32,
    pub added_at: Option<DateTime<Utc>>,
}

impl InventoryItem {
    /// Create an item with just a name and a quantity of one
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            upc: None,
            brand: None,
            category: None,
            quantity: 1,
            added_at: None,
        }
    }

    fn is_name_only(&self) -> bool {
        self.upc.is_none()
            && self.brand.is_none()
            && self.category.is_none()
            && self.added_at.is_none()
            && self.quantity == 1
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum InventoryItemRepr {
    Name(String),
    Item(InventoryItemFields),
}

#[derive(Serialize, Deserialize)]
struct InventoryItemFields {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    upc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    category: Option<String>,
    #[serde(default = "default_quantity")]
    quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    added_at: Option<DateTime<Utc>>,
}

fn default_quantity() -> u32 {
    1
}

impl From<InventoryItemRepr> for InventoryItem {
    fn from(repr: InventoryItemRepr) -> Self {
        match repr {
            InventoryItemRepr::Name(name) => InventoryItem::named(name),
            InventoryItemRepr::Item(f) => InventoryItem {
                name: f.name,
                upc: f.upc,
                brand: f.brand,
                category: f.category,
                quantity: f.quantity,
                added_at: f.added_at,
            },
        }
    }
}

impl From<InventoryItem> for InventoryItemRepr {
    fn from(item: InventoryItem) -> Self {
        if item.is_name_only() {
            return InventoryItemRepr::Name(item.name);
        }
        InventoryItemRepr::Item(InventoryItemFields {
            name: item.name,
            upc: item.upc,
            brand: item.brand,
            category: item.category,
            quantity: item.quantity,
            added_at: item.added_at,
        })
    }
}

/// User account as persisted in the user store.
///
/// Keyed by `email`, which never changes once the account exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    pub hashed_password: String,
    #[serde(default)]
    pub inventory: Vec<InventoryItem>,
    #[serde(default)]
    pub deleted_inventory: Vec<InventoryItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with empty inventories
    pub fn new(name: String, email: String, hashed_password: String) -> Self {
        let now = Utc::now();
        Self {
            name,
            email,
            hashed_password,
            inventory: Vec::new(),
            deleted_inventory: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the inventories; `None` keeps the current sequence.
    pub fn replace_inventory(
        &mut self,
        inventory: Option<Vec<InventoryItem>>,
        deleted_inventory: Option<Vec<InventoryItem>>,
    ) {
        if let Some(inventory) = inventory {
            self.inventory = inventory;
        }
        if let Some(deleted) = deleted_inventory {
            self.deleted_inventory = deleted;
        }
        self.updated_at = Utc::now();
    }
}

/// Public identity of a user (safe to return to client)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserSummary {
    #[schema(example = "Jane Doe")]
    pub name: String,
    #[schema(example = "jane@example.com")]
    pub email: String,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

/// User profile with inventory (no credentials)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserResponse {
    pub name: String,
    pub email: String,
    pub inventory: Vec<InventoryItem>,
    pub deleted_inventory: Vec<InventoryItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            name: user.name,
            email: user.email,
            inventory: user.inventory,
            deleted_inventory: user.deleted_inventory,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// One user's inventory in the all-inventories listing
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserInventory {
    pub name: String,
    pub email: String,
    pub inventory: Vec<InventoryItem>,
}

impl From<User> for UserInventory {
    fn from(user: User) -> Self {
        Self {
            name: user.name,
            email: user.email,
            inventory: user.inventory,
        }
    }
}
