//! Repository layer - Data access abstraction
//!
//! Each repository wraps one JSON store and adds the invariants of its
//! record kind: unique email for users, ownership and soft delete for
//! trainings.

mod training_repository;
mod user_repository;

pub use training_repository::{TrainingRepository, TrainingStore};
pub use user_repository::{UserRepository, UserStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use training_repository::MockTrainingRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
