//! Training repository with the soft-delete lifecycle.
//!
//! active → soft delete → trashed → restore → active, or trashed →
//! permanent delete → removed. Only the creator may move a training between
//! these states.

use std::path::PathBuf;

use crate::domain::{Training, TrainingChanges};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::store::{JsonStore, Record};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

impl Record for Training {
    fn key(&self) -> &str {
        &self.id
    }
}

/// Training repository trait for dependency injection.
///
/// `find_by_id` sees trashed trainings; the list methods split active and
/// trashed views.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait TrainingRepository: Send + Sync {
    /// Find training by ID, including trashed
    fn find_by_id(&self, id: &str) -> Option<Training>;

    /// Insert a new training
    fn create(&self, training: Training) -> AppResult<Training>;

    /// Apply a partial update (creator only)
    fn update(&self, id: &str, requesting_email: &str, changes: TrainingChanges)
        -> AppResult<Training>;

    /// Trainings not in any recycle bin, newest first
    fn list_active(&self) -> Vec<Training>;

    /// Trashed trainings created by `email`, most recently deleted first
    fn list_trashed_for(&self, email: &str) -> Vec<Training>;

    /// Move to the recycle bin (creator only)
    fn soft_delete(&self, id: &str, requesting_email: &str) -> AppResult<Training>;

    /// Bring back from the recycle bin (creator only)
    fn restore(&self, id: &str, requesting_email: &str) -> AppResult<Training>;

    /// Erase the record for good (creator only)
    fn permanently_delete(&self, id: &str, requesting_email: &str) -> AppResult<()>;

    /// Number of stored trainings, trashed included
    fn count(&self) -> usize;
}

/// Concrete implementation of TrainingRepository over a [`JsonStore`]
pub struct TrainingStore {
    store: JsonStore<Training>,
}

impl TrainingStore {
    /// Open (or start) the training store at `path`
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            store: JsonStore::open(path),
        }
    }
}

fn ensure_owner(training: &Training, requesting_email: &str, action: &str) -> AppResult<()> {
    if training.is_owned_by(requesting_email) {
        Ok(())
    } else {
        tracing::warn!(
            training_id = %training.id,
            requested_by = %requesting_email,
            "Rejected {} by non-owner",
            action
        );
        Err(AppError::forbidden(format!(
            "you can only {} your own trainings",
            action
        )))
    }
}

impl TrainingRepository for TrainingStore {
    fn find_by_id(&self, id: &str) -> Option<Training> {
        self.store.get(id)
    }

    fn create(&self, training: Training) -> AppResult<Training> {
        if !self.store.insert_new(training.clone())? {
            return Err(AppError::already_exists("training"));
        }
        tracing::info!(training_id = %training.id, created_by = %training.created_by, "Training created");
        Ok(training)
    }

    fn update(
        &self,
        id: &str,
        requesting_email: &str,
        changes: TrainingChanges,
    ) -> AppResult<Training> {
        self.store
            .update(id, |training: &mut Training| {
                ensure_owner(training, requesting_email, "update")?;
                training.apply(changes);
                Ok::<_, AppError>(())
            })?
            .ok_or_not_found("training")
    }

    fn list_active(&self) -> Vec<Training> {
        let mut trainings = self.store.list_filtered(Training::is_active);
        trainings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        trainings
    }

    fn list_trashed_for(&self, email: &str) -> Vec<Training> {
        let mut trainings = self
            .store
            .list_filtered(|t| t.is_deleted() && t.is_owned_by(email));
        trainings.sort_by(|a, b| b.deleted_at.cmp(&a.deleted_at));
        trainings
    }

    fn soft_delete(&self, id: &str, requesting_email: &str) -> AppResult<Training> {
        let training = self
            .store
            .update(id, |training: &mut Training| {
                ensure_owner(training, requesting_email, "delete")?;
                training.soft_delete();
                Ok::<_, AppError>(())
            })?
            .ok_or_not_found("training")?;

        tracing::info!(training_id = %id, "Training moved to recycle bin");
        Ok(training)
    }

    fn restore(&self, id: &str, requesting_email: &str) -> AppResult<Training> {
        let training = self
            .store
            .update(id, |training: &mut Training| {
                ensure_owner(training, requesting_email, "restore")?;
                training.restore();
                Ok::<_, AppError>(())
            })?
            .ok_or_not_found("training")?;

        tracing::info!(training_id = %id, "Training restored");
        Ok(training)
    }

    fn permanently_delete(&self, id: &str, requesting_email: &str) -> AppResult<()> {
        self.store
            .delete_if(id, |training| ensure_owner(training, requesting_email, "delete"))?
            .ok_or_not_found("training")?;

        tracing::info!(training_id = %id, "Training permanently deleted");
        Ok(())
    }

    fn count(&self) -> usize {
        self.store.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NewTraining;

    fn open() -> (tempfile::TempDir, TrainingStore) {
        let dir = tempfile::tempdir().unwrap();
        let repo = TrainingStore::open(dir.path().join("trainings.json"));
        (dir, repo)
    }

    fn training_by(email: &str, title: &str) -> Training {
        Training::new(
            NewTraining {
                title: title.into(),
                ..Default::default()
            },
            email.into(),
        )
    }

    #[test]
    fn test_update_by_non_owner_is_forbidden() {
        let (_dir, repo) = open();
        let training = repo.create(training_by("alice@x.com", "Safety")).unwrap();

        let changes = TrainingChanges {
            title: Some("Hijacked".into()),
            ..Default::default()
        };
        let result = repo.update(&training.id, "bob@x.com", changes);

        assert!(matches!(result, Err(AppError::Forbidden(_))));
        assert_eq!(repo.find_by_id(&training.id).unwrap().title, "Safety");
    }

    #[test]
    fn test_update_refreshes_updated_at() {
        let (_dir, repo) = open();
        let training = repo.create(training_by("alice@x.com", "Safety")).unwrap();

        let updated = repo
            .update(
                &training.id,
                "alice@x.com",
                TrainingChanges {
                    title: Some("Safety 101".into()),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.title, "Safety 101");
        assert!(updated.updated_at >= training.updated_at);
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        let (_dir, repo) = open();

        assert!(matches!(
            repo.soft_delete("missing", "alice@x.com"),
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            repo.restore("missing", "alice@x.com"),
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            repo.permanently_delete("missing", "alice@x.com"),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_trash_is_per_creator() {
        let (_dir, repo) = open();
        let alice = repo.create(training_by("alice@x.com", "A")).unwrap();
        let bob = repo.create(training_by("bob@x.com", "B")).unwrap();
        repo.soft_delete(&alice.id, "alice@x.com").unwrap();
        repo.soft_delete(&bob.id, "bob@x.com").unwrap();

        let trash = repo.list_trashed_for("alice@x.com");
        assert_eq!(trash.len(), 1);
        assert_eq!(trash[0].id, alice.id);
        assert!(repo.list_active().is_empty());
    }

    #[test]
    fn test_permanent_delete_by_non_owner_keeps_record() {
        let (_dir, repo) = open();
        let training = repo.create(training_by("alice@x.com", "A")).unwrap();
        repo.soft_delete(&training.id, "alice@x.com").unwrap();

        let result = repo.permanently_delete(&training.id, "bob@x.com");

        assert!(matches!(result, Err(AppError::Forbidden(_))));
        assert!(repo.find_by_id(&training.id).is_some());
    }

    #[test]
    fn test_list_active_newest_first() {
        let (_dir, repo) = open();
        let mut older = training_by("alice@x.com", "Older");
        older.created_at -= chrono::Duration::minutes(5);
        repo.create(older).unwrap();
        repo.create(training_by("alice@x.com", "Newer")).unwrap();

        let titles: Vec<_> = repo.list_active().into_iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["Newer", "Older"]);
    }
}
