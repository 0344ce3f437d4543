//! Infrastructure layer - External systems integration
//!
//! - JSON document stores (the only persistence)
//! - Repositories over those stores
//! - Barcode lookup API client

pub mod barcode_client;
pub mod repositories;
pub mod store;

pub use barcode_client::{BarcodeClient, BarcodeProduct, SearchUpcClient};
pub use repositories::{TrainingRepository, TrainingStore, UserRepository, UserStore};
pub use store::{JsonStore, Record, StoreError};

#[cfg(any(test, feature = "test-utils"))]
pub use barcode_client::MockBarcodeClient;
#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockTrainingRepository, MockUserRepository};
