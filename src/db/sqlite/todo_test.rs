//! Tests for SqliteTodoRepository.

use crate::db::{Database, DbError, NewTodo, SqliteDatabase, TodoChanges, TodoRepository};

async fn setup_db() -> SqliteDatabase {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");
    db.migrate().await.expect("Migration should succeed");
    db
}

fn new_todo(name: &str, description: &str) -> NewTodo {
    NewTodo {
        name: name.to_string(),
        description: description.to_string(),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn create_assigns_id_and_timestamp() {
    let db = setup_db().await;
    let repo = db.todos();

    let created = repo
        .create(&new_todo("Buy milk", "2%"))
        .await
        .expect("Create should succeed");

    assert_eq!(created.id.len(), 32);
    assert_eq!(created.name, "Buy milk");
    assert_eq!(created.description, "2%");

    let retrieved = repo
        .get(&created.id)
        .await
        .expect("Get should succeed")
        .expect("Todo should exist");
    assert_eq!(retrieved, created);
}

#[tokio::test(flavor = "multi_thread")]
async fn create_generates_distinct_ids() {
    let db = setup_db().await;
    let repo = db.todos();

    let a = repo.create(&new_todo("A", "first")).await.unwrap();
    let b = repo.create(&new_todo("B", "second")).await.unwrap();

    assert_ne!(a.id, b.id);
}

#[tokio::test(flavor = "multi_thread")]
async fn create_rejects_empty_fields_without_writing() {
    let db = setup_db().await;
    let repo = db.todos();

    let err = repo.create(&new_todo("", "2%")).await.unwrap_err();
    assert!(matches!(err, DbError::Validation { ref field, .. } if field == "Name"));

    let err = repo.create(&new_todo("Buy milk", "")).await.unwrap_err();
    assert!(matches!(err, DbError::Validation { ref field, .. } if field == "Description"));

    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn get_nonexistent_todo_returns_none() {
    let db = setup_db().await;

    let result = db.todos().get("nonexist").await.expect("Get should succeed");
    assert!(result.is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn list_returns_todos_in_insertion_order() {
    let db = setup_db().await;
    let repo = db.todos();

    assert!(repo.list().await.unwrap().is_empty());

    let first = repo.create(&new_todo("First", "one")).await.unwrap();
    let second = repo.create(&new_todo("Second", "two")).await.unwrap();
    let third = repo.create(&new_todo("Third", "three")).await.unwrap();

    let ids: Vec<String> = repo
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.id)
        .collect();
    assert_eq!(ids, vec![first.id, second.id, third.id]);
}

#[tokio::test(flavor = "multi_thread")]
async fn update_replaces_fields_and_keeps_identity() {
    let db = setup_db().await;
    let repo = db.todos();

    let created = repo.create(&new_todo("Buy milk", "2%")).await.unwrap();

    let changes = TodoChanges {
        name: Some("Buy oat milk".to_string()),
        description: Some("barista".to_string()),
    };
    let updated = repo
        .update(&created.id, &changes)
        .await
        .expect("Update should succeed")
        .expect("Todo should exist");

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.created_at, created.created_at);
    assert_eq!(updated.name, "Buy oat milk");
    assert_eq!(updated.description, "barista");

    let stored = repo.get(&created.id).await.unwrap().unwrap();
    assert_eq!(stored, updated);
}

#[tokio::test(flavor = "multi_thread")]
async fn update_leaves_absent_fields_untouched() {
    let db = setup_db().await;
    let repo = db.todos();

    let created = repo.create(&new_todo("Buy milk", "2%")).await.unwrap();

    let changes = TodoChanges {
        name: Some("Buy oat milk".to_string()),
        description: None,
    };
    let updated = repo.update(&created.id, &changes).await.unwrap().unwrap();

    assert_eq!(updated.name, "Buy oat milk");
    assert_eq!(updated.description, "2%");
}

#[tokio::test(flavor = "multi_thread")]
async fn update_with_no_changes_returns_current_record() {
    let db = setup_db().await;
    let repo = db.todos();

    let created = repo.create(&new_todo("Buy milk", "2%")).await.unwrap();

    let unchanged = repo
        .update(&created.id, &TodoChanges::default())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(unchanged, created);

    let missing = repo
        .update("nonexist", &TodoChanges::default())
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn update_is_idempotent() {
    let db = setup_db().await;
    let repo = db.todos();

    let created = repo.create(&new_todo("Buy milk", "2%")).await.unwrap();
    let changes = TodoChanges {
        name: Some("Buy oat milk".to_string()),
        description: Some("2%".to_string()),
    };

    let once = repo.update(&created.id, &changes).await.unwrap().unwrap();
    let twice = repo.update(&created.id, &changes).await.unwrap().unwrap();

    assert_eq!(once, twice);
    assert_eq!(twice.created_at, created.created_at);
}

#[tokio::test(flavor = "multi_thread")]
async fn update_rejects_empty_provided_field() {
    let db = setup_db().await;
    let repo = db.todos();

    let created = repo.create(&new_todo("Buy milk", "2%")).await.unwrap();
    let changes = TodoChanges {
        name: Some(String::new()),
        description: None,
    };

    let err = repo.update(&created.id, &changes).await.unwrap_err();
    assert!(matches!(err, DbError::Validation { .. }));

    let stored = repo.get(&created.id).await.unwrap().unwrap();
    assert_eq!(stored.name, "Buy milk");
}

#[tokio::test(flavor = "multi_thread")]
async fn update_nonexistent_todo_returns_none_and_changes_nothing() {
    let db = setup_db().await;
    let repo = db.todos();

    let existing = repo.create(&new_todo("Keep", "me")).await.unwrap();
    let changes = TodoChanges {
        name: Some("Ghost".to_string()),
        description: Some("nobody".to_string()),
    };

    let result = repo.update("nonexist", &changes).await.unwrap();
    assert!(result.is_none());

    let todos = repo.list().await.unwrap();
    assert_eq!(todos, vec![existing]);
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_removes_exactly_one_record() {
    let db = setup_db().await;
    let repo = db.todos();

    let keep = repo.create(&new_todo("Keep", "me")).await.unwrap();
    let doomed = repo.create(&new_todo("Delete", "me")).await.unwrap();

    let deleted = repo
        .delete(&doomed.id)
        .await
        .expect("Delete should succeed")
        .expect("Todo should exist");
    assert_eq!(deleted, doomed);

    assert_eq!(repo.count().await.unwrap(), 1);
    assert!(repo.get(&doomed.id).await.unwrap().is_none());
    assert!(repo.get(&keep.id).await.unwrap().is_some());

    let again = repo.delete(&doomed.id).await.unwrap();
    assert!(again.is_none());
    assert_eq!(repo.count().await.unwrap(), 1);
}
