//! Integration tests for the JSON stores and the repositories built on them.

use std::sync::{Arc, Barrier};
use std::thread;

use trainhub::domain::{InventoryItem, NewTraining, Training, User};
use trainhub::errors::AppError;
use trainhub::infra::{TrainingRepository, TrainingStore, UserRepository, UserStore};

fn user(email: &str) -> User {
    User::new("Alice".into(), email.into(), "$argon2id$stub".into())
}

fn training(owner: &str, title: &str) -> Training {
    Training::new(
        NewTraining {
            title: title.into(),
            ..Default::default()
        },
        owner.into(),
    )
}

// =============================================================================
// Users
// =============================================================================

#[test]
fn test_duplicate_account_keeps_first_record() {
    let dir = tempfile::tempdir().unwrap();
    let users = UserStore::open(dir.path().join("users.json"));

    users.create(user("alice@x.com")).unwrap();
    let mut impostor = user("alice@x.com");
    impostor.name = "Mallory".into();

    let result = users.create(impostor);

    assert!(matches!(result, Err(AppError::AlreadyExists(_))));
    assert_eq!(users.find_by_email("alice@x.com").unwrap().name, "Alice");
}

#[test]
fn test_concurrent_signups_for_one_email_have_one_winner() {
    const RACERS: usize = 8;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("users.json");
    let users = Arc::new(UserStore::open(&path));
    let barrier = Arc::new(Barrier::new(RACERS));

    let handles: Vec<_> = (0..RACERS)
        .map(|i| {
            let users = Arc::clone(&users);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                let mut candidate = user("alice@x.com");
                candidate.name = format!("Racer {}", i);
                barrier.wait();
                match users.create(candidate) {
                    Ok(_) => true,
                    Err(AppError::AlreadyExists(_)) => false,
                    Err(other) => panic!("unexpected error: {}", other),
                }
            })
        })
        .collect();
    let wins = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .filter(|won| *won)
        .count();

    assert_eq!(wins, 1);
    let reopened = UserStore::open(&path);
    assert_eq!(reopened.count(), 1);
    assert!(reopened.find_by_email("alice@x.com").is_some());
}

#[test]
fn test_inventory_cap_leaves_store_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("users.json");
    let users = UserStore::open(&path);
    users.create(user("alice@x.com")).unwrap();
    let before = std::fs::read_to_string(&path).unwrap();

    let items = (0..1001)
        .map(|i| InventoryItem::named(format!("item-{}", i)))
        .collect();
    let result = users.replace_inventory("alice@x.com", Some(items), None);

    assert!(matches!(result, Err(AppError::Validation(_))));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
    assert!(users.find_by_email("alice@x.com").unwrap().inventory.is_empty());
}

#[test]
fn test_inventory_at_cap_is_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let users = UserStore::open(dir.path().join("users.json"));
    users.create(user("alice@x.com")).unwrap();

    let items = (0..1000)
        .map(|i| InventoryItem::named(format!("item-{}", i)))
        .collect();
    let updated = users
        .replace_inventory("alice@x.com", Some(items), None)
        .unwrap();

    assert_eq!(updated.inventory.len(), 1000);
}

// =============================================================================
// Trainings
// =============================================================================

#[test]
fn test_soft_delete_lifecycle() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trainings.json");
    let trainings = TrainingStore::open(&path);

    let t1 = trainings.create(training("alice@x.com", "Forklift")).unwrap();

    // Bob cannot trash Alice's training
    let denied = trainings.soft_delete(&t1.id, "bob@x.com");
    assert!(matches!(denied, Err(AppError::Forbidden(_))));
    assert!(trainings.find_by_id(&t1.id).unwrap().is_active());

    trainings.soft_delete(&t1.id, "alice@x.com").unwrap();
    assert!(trainings.list_active().is_empty());
    assert!(trainings.list_trashed_for("bob@x.com").is_empty());
    assert_eq!(trainings.list_trashed_for("alice@x.com").len(), 1);

    trainings.restore(&t1.id, "alice@x.com").unwrap();
    assert_eq!(trainings.list_active()[0].id, t1.id);
    assert!(trainings.list_trashed_for("alice@x.com").is_empty());

    trainings.permanently_delete(&t1.id, "alice@x.com").unwrap();
    assert!(trainings.find_by_id(&t1.id).is_none());

    // The purge is on disk too
    let reopened = TrainingStore::open(&path);
    assert_eq!(reopened.count(), 0);
}

#[test]
fn test_missing_training_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let trainings = TrainingStore::open(dir.path().join("trainings.json"));

    assert!(matches!(
        trainings.restore("nope", "alice@x.com"),
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        trainings.permanently_delete("nope", "alice@x.com"),
        Err(AppError::NotFound(_))
    ));
}

#[test]
fn test_training_file_format() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trainings.json");
    let trainings = TrainingStore::open(&path);
    let t1 = trainings.create(training("alice@x.com", "Forklift")).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    let stored: serde_json::Value = serde_json::from_str(&raw).unwrap();

    assert!(raw.contains("\n  \""));
    assert_eq!(stored[t1.id.as_str()]["created_by"], "alice@x.com");
    assert!(stored[t1.id.as_str()].get("deleted_at").is_none());
}
