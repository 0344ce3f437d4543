//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services.

use std::sync::Arc;

use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::BarcodeClient;
use crate::services::{
    AuthService, ServiceContainer, Services, TrainingService, UploadService, UserService,
};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Signup and login
    pub auth_service: Arc<dyn AuthService>,
    /// Profiles and inventories
    pub user_service: Arc<dyn UserService>,
    /// Trainings and the recycle bin
    pub training_service: Arc<dyn TrainingService>,
    /// Video and image storage
    pub upload_service: Arc<dyn UploadService>,
    /// Barcode product lookup
    pub barcode_client: Arc<dyn BarcodeClient>,
    services: Arc<dyn ServiceContainer>,
}

impl AppState {
    /// Open the stores named by `config` and build every service.
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let container = Services::from_config(config)?;
        Ok(Self::new(Arc::new(container)))
    }

    /// Create application state from an existing service container.
    pub fn new(services: Arc<dyn ServiceContainer>) -> Self {
        Self {
            auth_service: services.auth(),
            user_service: services.users(),
            training_service: services.trainings(),
            upload_service: services.uploads(),
            barcode_client: services.barcode(),
            services,
        }
    }

    /// Get the service container for centralized service access.
    pub fn services(&self) -> &Arc<dyn ServiceContainer> {
        &self.services
    }
}
