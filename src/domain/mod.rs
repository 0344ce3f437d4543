//! Domain layer - Core business entities and logic
//!
//! Users with their inventories, trainings with content blocks and the
//! soft-delete lifecycle, and password hashing. Nothing here knows how
//! records are stored.

pub mod password;
pub mod training;
pub mod user;

pub use password::Password;
pub use training::{BlockType, ContentBlock, NewTraining, Training, TrainingChanges};
pub use user::{
    normalize_email, InventoryItem, User, UserInventory, UserResponse, UserSummary,
};
