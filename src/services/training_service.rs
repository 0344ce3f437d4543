//! Training service - Content module use cases and the recycle bin.

use async_trait::async_trait;
use std::sync::Arc;

use super::blocking::run_blocking;
use crate::domain::{NewTraining, Training, TrainingChanges};
use crate::errors::{AppResult, OptionExt};
use crate::infra::TrainingRepository;

/// Training service trait for dependency injection.
///
/// `email` arguments identify the requesting user and must be normalized.
#[async_trait]
pub trait TrainingService: Send + Sync {
    async fn create(&self, created_by: String, fields: NewTraining) -> AppResult<Training>;

    /// Get training by ID (trashed ones included)
    async fn get(&self, id: String) -> AppResult<Training>;

    async fn list_active(&self) -> AppResult<Vec<Training>>;

    /// Recycle bin of one user
    async fn list_trashed(&self, email: String) -> AppResult<Vec<Training>>;

    async fn update(&self, id: String, email: String, changes: TrainingChanges)
        -> AppResult<Training>;

    async fn soft_delete(&self, id: String, email: String) -> AppResult<Training>;

    async fn restore(&self, id: String, email: String) -> AppResult<Training>;

    async fn permanently_delete(&self, id: String, email: String) -> AppResult<()>;
}

/// Concrete implementation of TrainingService over the training repository.
pub struct TrainingManager {
    trainings: Arc<dyn TrainingRepository>,
}

impl TrainingManager {
    pub fn new(trainings: Arc<dyn TrainingRepository>) -> Self {
        Self { trainings }
    }

    fn repo(&self) -> Arc<dyn TrainingRepository> {
        Arc::clone(&self.trainings)
    }
}

#[async_trait]
impl TrainingService for TrainingManager {
    async fn create(&self, created_by: String, fields: NewTraining) -> AppResult<Training> {
        let repo = self.repo();
        run_blocking(move || repo.create(Training::new(fields, created_by))).await
    }

    async fn get(&self, id: String) -> AppResult<Training> {
        let repo = self.repo();
        run_blocking(move || repo.find_by_id(&id).ok_or_not_found("training")).await
    }

    async fn list_active(&self) -> AppResult<Vec<Training>> {
        let repo = self.repo();
        run_blocking(move || Ok(repo.list_active())).await
    }

    async fn list_trashed(&self, email: String) -> AppResult<Vec<Training>> {
        let repo = self.repo();
        run_blocking(move || Ok(repo.list_trashed_for(&email))).await
    }

    async fn update(
        &self,
        id: String,
        email: String,
        changes: TrainingChanges,
    ) -> AppResult<Training> {
        let repo = self.repo();
        run_blocking(move || repo.update(&id, &email, changes)).await
    }

    async fn soft_delete(&self, id: String, email: String) -> AppResult<Training> {
        let repo = self.repo();
        run_blocking(move || repo.soft_delete(&id, &email)).await
    }

    async fn restore(&self, id: String, email: String) -> AppResult<Training> {
        let repo = self.repo();
        run_blocking(move || repo.restore(&id, &email)).await
    }

    async fn permanently_delete(&self, id: String, email: String) -> AppResult<()> {
        let repo = self.repo();
        run_blocking(move || repo.permanently_delete(&id, &email)).await
    }
}
