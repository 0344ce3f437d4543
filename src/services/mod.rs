//! Application services layer - Use cases and business logic.
//!
//! Services sit between the HTTP handlers and the repositories. The stores
//! are synchronous, so every repository call runs on the blocking pool.

mod auth_service;
mod blocking;
pub mod container;
mod training_service;
mod upload_service;
mod user_service;

pub(crate) use blocking::run_blocking;

// Service Container
pub use container::{ServiceContainer, Services, StoreStats};

// Service traits and implementations
pub use auth_service::{AuthService, Authenticator};
pub use training_service::{TrainingManager, TrainingService};
pub use upload_service::{LocalUploads, UploadService, UploadedFile};
pub use user_service::{UserManager, UserService};

#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;
