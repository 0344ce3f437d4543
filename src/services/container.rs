//! Service Container - Builds every service from configuration.
//!
//! Stores are opened exactly once here and shared through `Arc`; nothing
//! else in the process touches the store files.

use std::sync::Arc;

use serde::Serialize;
use utoipa::ToSchema;

use super::{
    AuthService, Authenticator, LocalUploads, TrainingManager, TrainingService, UploadService,
    UserManager, UserService,
};
use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::{
    BarcodeClient, SearchUpcClient, TrainingRepository, TrainingStore, UserRepository, UserStore,
};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Record counts per store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct StoreStats {
    pub users: usize,
    pub trainings: usize,
}

/// Service container trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    fn auth(&self) -> Arc<dyn AuthService>;

    fn users(&self) -> Arc<dyn UserService>;

    fn trainings(&self) -> Arc<dyn TrainingService>;

    fn uploads(&self) -> Arc<dyn UploadService>;

    fn barcode(&self) -> Arc<dyn BarcodeClient>;

    /// Current record counts of both stores
    fn stats(&self) -> StoreStats;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    user_repo: Arc<dyn UserRepository>,
    training_repo: Arc<dyn TrainingRepository>,
    auth_service: Arc<dyn AuthService>,
    user_service: Arc<dyn UserService>,
    training_service: Arc<dyn TrainingService>,
    upload_service: Arc<dyn UploadService>,
    barcode_client: Arc<dyn BarcodeClient>,
}

impl Services {
    /// Wire services over already-constructed repositories and adapters
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        training_repo: Arc<dyn TrainingRepository>,
        upload_service: Arc<dyn UploadService>,
        barcode_client: Arc<dyn BarcodeClient>,
    ) -> Self {
        Self {
            auth_service: Arc::new(Authenticator::new(user_repo.clone())),
            user_service: Arc::new(UserManager::new(user_repo.clone())),
            training_service: Arc::new(TrainingManager::new(training_repo.clone())),
            user_repo,
            training_repo,
            upload_service,
            barcode_client,
        }
    }

    /// Open the stores and upload directories named by `config`
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let user_repo = Arc::new(UserStore::open(config.users_file()));
        let training_repo = Arc::new(TrainingStore::open(config.trainings_file()));
        let uploads = Arc::new(LocalUploads::new(&config.upload_dir)?);
        let barcode = Arc::new(SearchUpcClient::new(config)?);

        tracing::info!(
            users = user_repo.count(),
            trainings = training_repo.count(),
            "Stores opened"
        );

        Ok(Self::new(user_repo, training_repo, uploads, barcode))
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }

    fn trainings(&self) -> Arc<dyn TrainingService> {
        self.training_service.clone()
    }

    fn uploads(&self) -> Arc<dyn UploadService> {
        self.upload_service.clone()
    }

    fn barcode(&self) -> Arc<dyn BarcodeClient> {
        self.barcode_client.clone()
    }

    fn stats(&self) -> StoreStats {
        StoreStats {
            users: self.user_repo.count(),
            trainings: self.training_repo.count(),
        }
    }
}
